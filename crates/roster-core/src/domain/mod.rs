//! Domain layer - records, validation and the repository abstraction
//!
//! Contains the record types, payload validators, id allocation and the
//! storage port. No dependencies on HTTP or filesystem concerns.

pub mod id;
pub mod ports;
pub mod records;
pub mod repository;
pub mod validation;

pub use id::{Clock, IdAllocator, SystemClock};
pub use ports::{CollectionBackend, Pagination};
pub use records::{EntityRecord, HobbyRecord, Record, RecordId};
pub use repository::Repository;

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// The first three variants classify validation failures in the order the
/// validator applies its rules; their display strings are the exact messages
/// returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Required field absent, empty or falsy
    #[error("{0}")]
    MissingField(String),

    /// Field present but not coercible to the expected type
    #[error("{0}")]
    InvalidType(String),

    /// Field present and well-typed but failing a content rule
    #[error("{0}")]
    InvalidFormat(String),

    /// No record with the requested id
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    /// Durable read or write failure
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::MissingField(message.into())
    }

    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self::InvalidType(message.into())
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence(message.into())
    }

    /// Validation errors are detected before any mutation takes place
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_) | Self::InvalidType(_) | Self::InvalidFormat(_)
        )
    }
}
