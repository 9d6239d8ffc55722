//! Payload validation
//!
//! Pure functions that classify malformed payloads before they reach a
//! repository. Deterministic, no state, no side effects. The error messages
//! are part of the API contract and surface verbatim in response bodies.
//!
//! A numeric zero `otherField` is treated as empty and rejected as a missing
//! field, exactly like `false`, `null` and the empty string. Historical
//! behavior, pinned by `rejects_zero_other_field_as_missing`.

use serde_json::{Number, Value};

use super::{DomainError, DomainResult};

/// An entity payload that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntity {
    pub name: String,
    /// Coerced numeric value; integer inputs stay integers
    pub other_field: Number,
}

/// A hobby payload that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidHobby {
    pub name: String,
}

/// Validate an entity payload
///
/// Rules, in order:
/// 1. `name` empty/missing or `otherField` missing/falsy -> `MissingField`
/// 2. `otherField` not coercible to a number -> `InvalidType`
/// 3. `name` containing a decimal digit -> `InvalidFormat`
pub fn validate_entity(
    name: Option<&str>,
    other_field: Option<&Value>,
) -> DomainResult<ValidEntity> {
    let name = name.unwrap_or_default();
    if name.is_empty() || is_falsy(other_field) {
        return Err(DomainError::missing_field("Fields cannot be empty"));
    }

    // is_falsy covered None, so the value is present here
    let other_field = match other_field {
        Some(Value::Number(n)) => n.clone(),
        Some(Value::String(s)) => coerce_number(s)
            .ok_or_else(|| DomainError::invalid_type("Other field must be a number"))?,
        _ => return Err(DomainError::invalid_type("Other field must be a number")),
    };

    if name.chars().any(char::is_numeric) {
        return Err(DomainError::invalid_format(
            "First name cannot contain numbers",
        ));
    }

    Ok(ValidEntity {
        name: name.to_string(),
        other_field,
    })
}

/// Validate a hobby payload: only the emptiness rule applies
pub fn validate_hobby(name: Option<&str>) -> DomainResult<ValidHobby> {
    let name = name.unwrap_or_default();
    if name.is_empty() {
        return Err(DomainError::missing_field("Name cannot be empty"));
    }

    Ok(ValidHobby {
        name: name.to_string(),
    })
}

/// Reject an empty or missing search term before it reaches a repository
pub fn require_search_term(term: Option<&str>) -> DomainResult<&str> {
    match term {
        Some(term) if !term.is_empty() => Ok(term),
        _ => Err(DomainError::missing_field("Search term is required")),
    }
}

/// Empty-field semantics: absent, null, false, "" and numeric zero all
/// count as empty
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !*b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(_) => false,
    }
}

/// Coerce a string to a JSON number, keeping integer inputs integral
fn coerce_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Number::from(int));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .and_then(Number::from_f64)
}
