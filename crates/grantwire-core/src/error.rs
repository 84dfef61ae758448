//! Error types for the Grantwire core library.
//!
//! Building and encoding grants never fails. Errors only come from turning
//! grant definitions into grants.

use thiserror::Error;

/// Result type alias using the Grantwire `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for Grantwire operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Grant definitions have the wrong overall shape
    #[error("Grant definition error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
