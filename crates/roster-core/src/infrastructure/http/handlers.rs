//! Request handlers for the entity and hobby endpoints
//!
//! Thin plumbing: parse the request shape, run the validator, delegate to
//! the repository, serialize the result. Validation happens before any
//! repository call, so no partial writes occur.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{error::ApiError, AppState};
use crate::domain::{
    records::{EntityRecord, HobbyRecord},
    validation, Pagination, RecordId,
};

/// Unvalidated entity body; both fields optional so the validator can
/// classify what is missing
#[derive(Debug, Deserialize)]
pub struct EntityBody {
    pub name: Option<String>,
    #[serde(rename = "otherField")]
    pub other_field: Option<Value>,
}

/// Unvalidated hobby body
#[derive(Debug, Deserialize)]
pub struct HobbyBody {
    pub name: Option<String>,
}

/// limit/offset arrive as raw strings: junk and negative values fall back
/// to the defaults instead of erroring
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            offset: lenient_param(self.offset.as_deref(), Pagination::DEFAULT_OFFSET),
            limit: lenient_param(self.limit.as_deref(), Pagination::DEFAULT_LIMIT),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

fn lenient_param(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .map(|v| v as usize)
        .unwrap_or(default)
}

// --- entity endpoints ---

pub async fn create_entity(
    State(state): State<AppState>,
    Json(body): Json<EntityBody>,
) -> Result<Json<EntityRecord>, ApiError> {
    let payload =
        validation::validate_entity(body.name.as_deref(), body.other_field.as_ref())?;
    let record = state.entities.create(payload).await?;
    Ok(Json(record))
}

pub async fn list_entities(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<EntityRecord>> {
    Json(state.entities.list(query.pagination()).await)
}

pub async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EntityRecord>, ApiError> {
    let record = state.entities.get(RecordId::new(id)).await?;
    Ok(Json(record))
}

pub async fn update_entity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<EntityBody>,
) -> Result<Json<EntityRecord>, ApiError> {
    let payload =
        validation::validate_entity(body.name.as_deref(), body.other_field.as_ref())?;
    let record = state.entities.update(RecordId::new(id), payload).await?;
    Ok(Json(record))
}

pub async fn delete_entity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.entities.delete(RecordId::new(id)).await?;
    Ok(Json(json!({"message": "Entity deleted successfully"})))
}

pub async fn search_entities(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<EntityRecord>>, ApiError> {
    let term = validation::require_search_term(query.q.as_deref())?;
    Ok(Json(state.entities.search_by_name(term).await))
}

// --- hobby endpoints ---

pub async fn create_hobby(
    State(state): State<AppState>,
    Json(body): Json<HobbyBody>,
) -> Result<Json<HobbyRecord>, ApiError> {
    let payload = validation::validate_hobby(body.name.as_deref())?;
    let record = state.hobbies.create(payload).await?;
    Ok(Json(record))
}

pub async fn list_hobbies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<HobbyRecord>> {
    Json(state.hobbies.list(query.pagination()).await)
}

pub async fn get_hobby(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<HobbyRecord>, ApiError> {
    let record = state.hobbies.get(RecordId::new(id)).await?;
    Ok(Json(record))
}

pub async fn update_hobby(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<HobbyBody>,
) -> Result<Json<HobbyRecord>, ApiError> {
    let payload = validation::validate_hobby(body.name.as_deref())?;
    let record = state.hobbies.update(RecordId::new(id), payload).await?;
    Ok(Json(record))
}

pub async fn delete_hobby(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    state.hobbies.delete(RecordId::new(id)).await?;
    Ok(Json(json!({"message": "Hobby deleted successfully"})))
}
