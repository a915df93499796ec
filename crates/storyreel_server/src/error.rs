//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storyreel_error::{StorageErrorKind, StoryreelError, StoryreelErrorKind};

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error bodies.
#[derive(Debug)]
pub enum ServerError {
    /// The requested resource does not exist
    NotFound(String),
    /// The request was malformed or failed validation
    BadRequest(String),
    /// Anything the caller can't fix
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type ServerResult<T> = Result<T, ServerError>;

impl From<StoryreelError> for ServerError {
    fn from(err: StoryreelError) -> Self {
        match err.kind() {
            StoryreelErrorKind::Storage(storage) => match &storage.kind {
                StorageErrorKind::NotFound(what) => ServerError::NotFound(what.clone()),
                StorageErrorKind::InvalidId(id) => {
                    ServerError::BadRequest(format!("invalid identifier: {id}"))
                }
                _ => ServerError::Internal(storage.to_string()),
            },
            StoryreelErrorKind::Validation(validation) => {
                ServerError::BadRequest(validation.message.clone())
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ServerError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{what} not found"),
            ),
            ServerError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
            ServerError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
