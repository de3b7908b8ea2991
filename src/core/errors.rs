//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for aurora-risk operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input that violates a domain contract: empty batch, zero-sized image,
    /// malformed pixel buffer or an unrecognized categorical label
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// Image bytes that could not be decoded into a pixel buffer
    #[error("Failed to decode image {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    /// File system errors with the offending path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-input error for a named field
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an error for a categorical label outside its domain
    pub fn unknown_label(field: &str, value: &str, expected: &[&str]) -> Self {
        Self::invalid_input(
            field,
            format!(
                "unrecognized value '{}' (expected one of: {})",
                value,
                expected.join(", ")
            ),
        )
    }

    /// Create a decode error for a named image source
    pub fn decode(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the caller supplied input outside a domain contract
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
