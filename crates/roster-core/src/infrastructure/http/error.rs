//! HTTP error mapping
//!
//! Every failure surfaces as `{"error": <message>}` with a status derived
//! from the domain taxonomy: validation failures are 400, missing records
//! 404, storage failures 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

/// Domain error carried to the HTTP layer
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::MissingField(_)
            | DomainError::InvalidType(_)
            | DomainError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Persistence(_) => {
                tracing::error!("persistence failure: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.0.to_string()
        }));

        (status, body).into_response()
    }
}
