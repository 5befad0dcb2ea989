//! Centralized error types for SchoolHelper.

use thiserror::Error;

/// Main error type for SchoolHelper operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Remote store error: {0}")]
    Remote(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for SchoolHelper operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a remote store error.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }
}
