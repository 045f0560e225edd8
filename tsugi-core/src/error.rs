//! Core error type. Adapter implementations wrap their failures into
//! [`CoreError`] at the port boundary.

use thiserror::Error;

/// Errors surfaced by the queue, settings, and collection operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Persistent storage adapter failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O failure in a file-backed storage adapter.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote collection fetch failure (network error, malformed or
    /// missing collection data).
    #[error("collection fetch failed: {0}")]
    Collection(String),
}
