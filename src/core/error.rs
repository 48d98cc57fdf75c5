//! Error types for server lifecycle operations.
//!
//! Request-level failures (missing fields, invalid input, formula domain
//! errors) are handled by [`crate::api::ApiError`]; this module only covers
//! errors that stop the server itself.

use thiserror::Error;

/// A specialized Result type for server lifecycle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while starting or running the HTTP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to bind to the configured address.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The serve loop terminated with an error.
    #[error("HTTP server error: {0}")]
    Http(String),
}

impl Error {
    /// Create a bind error for the given address.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create an HTTP server error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
