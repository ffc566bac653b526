//! Chat service error types

use thiserror::Error;

/// Any failure talking to the chat service.
///
/// The widget shows every variant the same way; the distinction only matters
/// for logs.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Response body was not a valid reply
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ChatError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}
