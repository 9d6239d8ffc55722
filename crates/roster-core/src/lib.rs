//! # roster-core
//!
//! A minimal CRUD HTTP service managing two independent record collections
//! (entities and hobbies) behind one generic repository abstraction. The
//! repository behaves identically over a volatile in-memory backend and a
//! durable flat JSON document; validation, id allocation and the storage
//! port live in the domain layer, adapters and the axum surface in the
//! infrastructure layer.

#![warn(rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    Clock, CollectionBackend, DomainError, DomainResult, EntityRecord, HobbyRecord,
    IdAllocator, Pagination, Record, RecordId, Repository, SystemClock,
};

// Configuration exports
pub use config::{ServerConfig, StorageConfig};

// Infrastructure exports
pub use infrastructure::{
    http::{router, ApiError, AppState},
    storage::{JsonFileBackend, MemoryBackend},
};

/// Re-export commonly used types
pub mod prelude {
    pub use super::{
        AppState, CollectionBackend, DomainError, DomainResult, EntityRecord,
        HobbyRecord, IdAllocator, JsonFileBackend, MemoryBackend, Pagination, Record,
        RecordId, Repository, ServerConfig, StorageConfig,
    };
}
