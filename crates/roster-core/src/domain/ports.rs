//! Storage port for the repository
//!
//! Defines the domain's requirement for collection persistence, allowing
//! infrastructure adapters to implement volatile or durable backends.

use async_trait::async_trait;
use serde_json::Value;

use super::DomainResult;

/// Persistence backend for named record collections
///
/// Implementations must write the whole collection before `persist`
/// returns; the repository treats a successful return as durably stored.
#[async_trait]
pub trait CollectionBackend: Send + Sync {
    /// Load the stored snapshot of a collection
    ///
    /// `None` means the backend has nothing for this collection and the
    /// repository starts empty.
    async fn load(&self, collection: &str) -> DomainResult<Option<Vec<Value>>>;

    /// Replace the stored snapshot of a collection
    async fn persist(&self, collection: &str, records: Vec<Value>) -> DomainResult<()>;
}

/// Pagination parameters for list operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Pagination {
    pub const DEFAULT_OFFSET: usize = 0;
    pub const DEFAULT_LIMIT: usize = 10;

    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: Self::DEFAULT_OFFSET,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
