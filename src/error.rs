//! Friday Error Types
//!
//! Centralized error handling for the assistant.

use thiserror::Error;

/// Central error type for Friday
#[derive(Error, Debug)]
pub enum FridayError {
    #[error("Person lookup error: {0}")]
    Lookup(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Friday operations
pub type FridayResult<T> = Result<T, FridayError>;
