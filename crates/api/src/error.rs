//! Error types and status mapping for the API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while handling an API request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field was blank after trimming.
    #[error("{0}")]
    Validation(String),

    /// The referenced lead does not exist.
    #[error("Invalid lead_id: {0}")]
    UnknownLead(i64),

    /// The generation service failed.
    #[error(transparent)]
    Generation(#[from] generator_core::GeneratorError),

    /// Unexpected store failure; the in-flight write was rolled back.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            ApiError::UnknownLead(id) => {
                tracing::warn!(lead_id = id, "Unknown lead");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Generation(err) => {
                tracing::error!("Generation error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "detail": detail
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
