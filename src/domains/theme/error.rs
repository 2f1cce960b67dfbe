//! Theme-specific error types.

use thiserror::Error;

/// Errors that can occur while persisting the theme preference.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// I/O error touching the preference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The preference file held malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
