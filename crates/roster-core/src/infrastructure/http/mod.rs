//! HTTP surface
//!
//! Maps verbs and paths onto repository operations. The router carries an
//! [`AppState`] holding one repository per collection; the two collections
//! never serialize against each other.

pub mod error;
pub mod handlers;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{ServerConfig, StorageConfig},
    domain::{
        records::{EntityRecord, HobbyRecord, Record},
        DomainResult, IdAllocator, Repository,
    },
    infrastructure::storage::JsonFileBackend,
};

pub use error::ApiError;

/// Shared state: one repository per resource kind
#[derive(Clone)]
pub struct AppState {
    pub entities: Arc<Repository<EntityRecord>>,
    pub hobbies: Arc<Repository<HobbyRecord>>,
}

impl AppState {
    /// In-memory repositories, empty at start
    pub fn volatile() -> Self {
        Self {
            entities: Arc::new(Repository::volatile()),
            hobbies: Arc::new(Repository::volatile()),
        }
    }

    /// Repositories selected by the configured storage mode
    ///
    /// Durable mode shares a single document between both collections.
    pub async fn from_config(config: &ServerConfig) -> DomainResult<Self> {
        match &config.storage {
            StorageConfig::Volatile => Ok(Self::volatile()),
            StorageConfig::Durable(path) => {
                let backend = Arc::new(
                    JsonFileBackend::open(
                        path,
                        &[EntityRecord::COLLECTION, HobbyRecord::COLLECTION],
                    )
                    .await?,
                );
                Ok(Self {
                    entities: Arc::new(
                        Repository::open(backend.clone(), IdAllocator::system()).await?,
                    ),
                    hobbies: Arc::new(
                        Repository::open(backend, IdAllocator::system()).await?,
                    ),
                })
            }
        }
    }
}

/// Build the service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/entity",
            get(handlers::list_entities).post(handlers::create_entity),
        )
        .route(
            "/entity/{id}",
            get(handlers::get_entity)
                .put(handlers::update_entity)
                .delete(handlers::delete_entity),
        )
        .route("/search", get(handlers::search_entities))
        .route(
            "/hobby",
            get(handlers::list_hobbies).post(handlers::create_hobby),
        )
        .route(
            "/hobby/{id}",
            get(handlers::get_hobby)
                .put(handlers::update_hobby)
                .delete(handlers::delete_hobby),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
