//! Custom error types for Storytime
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Storytime operations
#[derive(Error, Debug)]
pub enum StorytimeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

// Implement From traits for common error types

impl From<std::io::Error> for StorytimeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorytimeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Storytime operations
pub type StorytimeResult<T> = Result<T, StorytimeError>;
