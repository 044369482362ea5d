//! Common error types for CogniGrasp

use thiserror::Error;

/// Common result type for CogniGrasp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the CogniGrasp crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding/decoding error for list-valued columns
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Subject configuration missing or unusable (bootstrap defect,
    /// e.g. no `general` row or an empty variation list)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error (corrupted stored data, unexpected state)
    #[error("Internal error: {0}")]
    Internal(String),
}
