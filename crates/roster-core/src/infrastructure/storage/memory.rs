//! Volatile backend
//!
//! Keeps nothing: the repository's own in-memory collection is the only
//! copy, and it dies with the process.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{CollectionBackend, DomainResult};

/// No-op backend for in-memory-only storage
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryBackend;

#[async_trait]
impl CollectionBackend for MemoryBackend {
    async fn load(&self, _collection: &str) -> DomainResult<Option<Vec<Value>>> {
        Ok(None)
    }

    async fn persist(&self, _collection: &str, _records: Vec<Value>) -> DomainResult<()> {
        Ok(())
    }
}
