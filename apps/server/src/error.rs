//! Server error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entities::ValidationError;
use serde_json::json;
use todo_store::StoreError;

/// Stable error codes returned to clients.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";
    pub const DUPLICATE_LIST_NAME: &str = "DUPLICATE_LIST_NAME";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters (unparsable ids and the like).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A rejected list or todo name; surfaced with its user-facing message.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Referenced list or todo does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage error. A duplicate-name constraint violation maps to 409;
    /// everything else fails the request.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, msg.clone())
            }
            ServerError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                error_codes::VALIDATION_FAILED,
                err.to_string(),
            ),
            ServerError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, error_codes::RESOURCE_NOT_FOUND, msg.clone())
            }
            ServerError::Storage(err @ StoreError::DuplicateListName { .. }) => {
                (StatusCode::CONFLICT, error_codes::DUPLICATE_LIST_NAME, err.to_string())
            }
            ServerError::Storage(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::INTERNAL_ERROR,
                err.to_string(),
            ),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
