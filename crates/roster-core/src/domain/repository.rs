//! Generic record repository
//!
//! One `Repository<T>` owns one ordered collection of records, whatever the
//! backend. Mutating operations are read-modify-persist critical sections:
//! the change is applied to a copy, the copy is handed to the backend, and
//! the in-memory collection only advances once the backend accepted the
//! write. Collections lock independently of each other.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{
    id::IdAllocator,
    ports::{CollectionBackend, Pagination},
    records::{Record, RecordId},
    DomainError, DomainResult,
};
use crate::infrastructure::storage::MemoryBackend;

/// Ordered collection of records with CRUD and substring search
pub struct Repository<T: Record> {
    records: RwLock<Vec<T>>,
    ids: IdAllocator,
    backend: Arc<dyn CollectionBackend>,
}

impl<T: Record> Repository<T> {
    /// Open a repository over a backend, loading any stored snapshot
    ///
    /// Every restored id is observed by the allocator so fresh ids stay
    /// above the restored ones.
    pub async fn open(
        backend: Arc<dyn CollectionBackend>,
        ids: IdAllocator,
    ) -> DomainResult<Self> {
        let records = match backend.load(T::COLLECTION).await? {
            Some(values) => values
                .into_iter()
                .map(|value| {
                    serde_json::from_value(value).map_err(|e| {
                        DomainError::persistence(format!(
                            "corrupt {} record in collection '{}': {e}",
                            T::KIND,
                            T::COLLECTION
                        ))
                    })
                })
                .collect::<DomainResult<Vec<T>>>()?,
            None => Vec::new(),
        };

        for record in &records {
            ids.observe(record.id());
        }

        Ok(Self {
            records: RwLock::new(records),
            ids,
            backend,
        })
    }

    /// Volatile repository: empty at start, nothing survives the process
    pub fn volatile() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            ids: IdAllocator::system(),
            backend: Arc::new(MemoryBackend),
        }
    }

    /// Append a new record built from an already-validated payload
    pub async fn create(&self, payload: T::Payload) -> DomainResult<T> {
        let mut records = self.records.write().await;
        let record = T::from_payload(self.ids.next(), payload);

        let mut next = records.clone();
        next.push(record.clone());
        self.persist(&next).await?;

        *records = next;
        Ok(record)
    }

    /// Slice of the collection in insertion order
    ///
    /// An offset at or past the end yields an empty vec, not an error.
    pub async fn list(&self, page: Pagination) -> Vec<T> {
        self.records
            .read()
            .await
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: RecordId) -> DomainResult<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(T::KIND))
    }

    /// Replace every field of an existing record except its id
    pub async fn update(&self, id: RecordId, payload: T::Payload) -> DomainResult<T> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| DomainError::not_found(T::KIND))?;

        let mut next = records.clone();
        next[index].replace(payload);
        let updated = next[index].clone();
        self.persist(&next).await?;

        *records = next;
        Ok(updated)
    }

    pub async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| DomainError::not_found(T::KIND))?;

        let mut next = records.clone();
        next.remove(index);
        self.persist(&next).await?;

        *records = next;
        Ok(())
    }

    /// Case-sensitive substring match against record names
    ///
    /// Term emptiness is the caller's concern; see
    /// [`validation::require_search_term`](super::validation::require_search_term).
    pub async fn search_by_name(&self, term: &str) -> Vec<T> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.name().contains(term))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    async fn persist(&self, records: &[T]) -> DomainResult<()> {
        let values = records
            .iter()
            .map(|record| {
                serde_json::to_value(record)
                    .map_err(|e| DomainError::persistence(e.to_string()))
            })
            .collect::<DomainResult<Vec<Value>>>()?;
        self.backend.persist(T::COLLECTION, values).await
    }
}
