//! Error Types

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while reading or writing client-side state
#[derive(Error, Debug)]
pub enum CoreError {
    /// Filesystem error from a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage backend missing or refused the operation
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl CoreError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CoreError::Json(_) => "Stored session is unreadable. Please sign in again.",
            CoreError::Io(_) | CoreError::StorageUnavailable(_) => {
                "Local storage is unavailable."
            }
        }
    }
}
