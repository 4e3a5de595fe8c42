//! Error types for roster.
//!
//! This module defines all error types used throughout the roster crate,
//! providing detailed context for debugging and user-friendly error messages.

use thiserror::Error;

/// The main error type for roster operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Loader Errors ===
    /// The HTTP request could not be completed (connect, timeout, body read).
    #[error("request to directory source failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The directory source answered with a non-success status.
    #[error("directory source {url} returned status {status}")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code received.
        status: u16,
    },

    /// A raw record could not be mapped into a person record.
    #[error("invalid record at position {index}: {message}")]
    InvalidRecord {
        /// Position of the record in the response.
        index: usize,
        /// Description of what went wrong.
        message: String,
    },

    // === Navigation Errors ===
    /// A detail view was requested for an index outside the directory.
    #[error("index {index} is out of range for a directory of {len} records")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of records in the directory.
        len: usize,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for roster operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid record error.
    #[must_use]
    pub fn invalid_record(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            index,
            message: message.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error happened while loading the directory.
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpStatus { .. } | Self::Json(_) | Self::InvalidRecord { .. }
        )
    }
}
