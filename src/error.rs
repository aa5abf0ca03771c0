//! Error handling for doctable.

use std::io;

use thiserror::Error;

/// Main error type for doctable operations.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a directory: {0}")]
    InvalidRoot(String),
}

/// Result type alias using DocError.
pub type Result<T> = std::result::Result<T, DocError>;
