//! Record types stored by the repositories
//!
//! Two record kinds exist: entities (`name` + `otherField`) and hobbies
//! (`name` only). Both carry a timestamp-derived integer id that is unique
//! within their collection and immutable after creation.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

use super::validation::{ValidEntity, ValidHobby};

/// Unique identifier for stored records
///
/// Millisecond-timestamp derived; see [`crate::domain::id::IdAllocator`]
/// for the allocation scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A record kind a [`Repository`](super::Repository) can own
///
/// Ties a stored shape to its validated payload, its collection name in the
/// durable document, and the label used in not-found messages.
pub trait Record:
    Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Validated payload that creates or replaces a record
    type Payload: Send + 'static;

    /// Resource label used in error messages ("Entity", "Hobby")
    const KIND: &'static str;

    /// Top-level key in the durable document
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;

    /// Build a fresh record from an allocated id and a validated payload
    fn from_payload(id: RecordId, payload: Self::Payload) -> Self;

    /// Replace every field except the id
    fn replace(&mut self, payload: Self::Payload);

    fn name(&self) -> &str;
}

/// An entity record: a named item with one numeric attribute
///
/// `otherField` keeps its camel-case wire name; the value is stored
/// coerced to a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "otherField")]
    pub other_field: Number,
}

impl Record for EntityRecord {
    type Payload = ValidEntity;

    const KIND: &'static str = "Entity";
    const COLLECTION: &'static str = "entities";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_payload(id: RecordId, payload: ValidEntity) -> Self {
        Self {
            id,
            name: payload.name,
            other_field: payload.other_field,
        }
    }

    fn replace(&mut self, payload: ValidEntity) {
        self.name = payload.name;
        self.other_field = payload.other_field;
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A hobby record: just a named item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HobbyRecord {
    pub id: RecordId,
    pub name: String,
}

impl Record for HobbyRecord {
    type Payload = ValidHobby;

    const KIND: &'static str = "Hobby";
    const COLLECTION: &'static str = "hobbies";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_payload(id: RecordId, payload: ValidHobby) -> Self {
        Self {
            id,
            name: payload.name,
        }
    }

    fn replace(&mut self, payload: ValidHobby) {
        self.name = payload.name;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
