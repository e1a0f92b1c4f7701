//! Client Error Types
//!
//! These never reach callers of `ApiClient`: every operation folds them into
//! an error envelope. They exist so the internals can use `?`.

use thiserror::Error;

/// Result type alias for client internals
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request could not be sent or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not a valid envelope
    #[error("Decode error: {0}")]
    Decode(String),

    /// Session store failed
    #[error("Storage error: {0}")]
    Storage(#[from] vexon_core::CoreError),
}

impl ClientError {
    /// Whether a caller could reasonably try again.
    ///
    /// The client itself never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
