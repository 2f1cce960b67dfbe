//! Fragment-specific error types.

use thiserror::Error;

/// Errors that can occur while fetching a shared markup fragment.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The request could not be completed at the transport level.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Failed to load {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    /// The target document has no slot with the given id.
    #[error("Unknown slot: {0}")]
    UnknownSlot(String),
}

impl FragmentError {
    /// Create a new non-success status error.
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    /// Create a new unknown-slot error.
    pub fn unknown_slot(id: impl Into<String>) -> Self {
        Self::UnknownSlot(id.into())
    }
}
