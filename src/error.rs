//! Error types for catalog loading and storage.
//!
//! The simulation itself is infallible; only data coming from outside
//! (level tables, persisted blobs) can fail.

use thiserror::Error;

/// Errors produced while building a catalog or talking to storage.
#[derive(Debug, Error)]
pub enum GardenError {
    /// A catalog must contain at least one level.
    #[error("catalog has no levels")]
    EmptyCatalog,

    /// A level configuration failed validation.
    #[error("invalid level {id}: {reason}")]
    InvalidLevel { id: u32, reason: String },

    /// A color string was not `#RRGGBB`.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// JSON could not be parsed or produced.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// The storage backend rejected a read or write.
    #[error("storage: {0}")]
    Storage(String),
}
