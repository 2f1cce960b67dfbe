//! Error types and handling for the site engine.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for site engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the site engine.
///
/// This enum captures all possible error conditions that can occur while
/// assembling pages, including domain-specific errors and external failures.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the fragments domain.
    #[error("Fragment error: {0}")]
    Fragment(#[from] crate::domains::fragments::FragmentError),

    /// Error originating from the theme domain.
    #[error("Theme error: {0}")]
    Theme(#[from] crate::domains::theme::ThemeError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from writing assembled pages or reading local state.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
