//! Error types for catalog-sync
//!
//! A single error enum covers the whole pipeline: configuration problems,
//! network failures, non-success HTTP responses, file I/O, and JSON parsing.
//! There is deliberately no retry or recovery layering — any error here is
//! fatal for the run and is reported once at the binary's top level.

use thiserror::Error;

/// Result type alias for catalog-sync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for catalog-sync
///
/// Each variant carries enough context to diagnose the failure from a single
/// log line.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "output_path")
        key: Option<String>,
    },

    /// Network error (connect failure, timeout, body read failure)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status
    #[error("HTTP error fetching catalog: {status} {url}")]
    HttpStatus {
        /// The status code returned by the endpoint
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be parsed as JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL could not be parsed
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidUrl {
        /// The URL string that failed to parse
        url: String,
        /// The parse failure reason
        reason: String,
    },
}

impl Error {
    /// Create a configuration error without an associated key
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: None,
        }
    }

    /// Create a configuration error tied to a specific configuration key
    pub fn config_key(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
