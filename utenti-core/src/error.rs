/// Structured error types for the utenti-core library.
///
/// Uses `thiserror` for better API surface and error composition.
/// The TUI binary can still use `anyhow` for convenience, but library
/// consumers get structured, composable errors.

use std::io;
use thiserror::Error;

/// Main error type for utenti-core operations
#[derive(Error, Debug)]
pub enum UtentiError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// HTTP transport failed (connect, timeout, TLS, body read)
    #[error("Request error: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// JSON decoding failed
    #[error("JSON error at {context}: {source}")]
    Decode {
        context: String,
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for utenti-core operations
pub type Result<T> = std::result::Result<T, UtentiError>;

impl UtentiError {
    /// Create an unexpected-status error
    pub fn unexpected_status(status: u16, endpoint: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Create a decode error with context
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
