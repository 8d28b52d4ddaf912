//! Inventory error types.

use crate::domain::DomainError;

/// Errors that can occur when loading station inventory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check STATIONS_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// The records could not form a consistent snapshot
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] DomainError),
}
