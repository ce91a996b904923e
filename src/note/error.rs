//! Error type for note collection operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),
}

impl NoteError {
    /// Create a not found error
    #[must_use]
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an invalid title error
    #[must_use]
    pub fn invalid_title<S: Into<String>>(msg: S) -> Self {
        Self::InvalidTitle(msg.into())
    }
}
