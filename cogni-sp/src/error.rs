//! Error types for cogni-sp
//!
//! Handlers return [`ApiResult`]; every error converts into a JSON body of
//! the form `{"error": "..."}` with the matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Map core errors onto HTTP statuses: `NotFound` is a 404, `InvalidInput`
/// a 400, everything else (database, IO, configuration defects) a 500.
impl From<cogni_common::Error> for ApiError {
    fn from(err: cogni_common::Error) -> Self {
        use cogni_common::Error;
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match self {
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
