//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic milliseconds)
//! - Storage (LocalStorage on web, in-memory elsewhere)
//! - Drawing (Canvas 2D surface on web)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod storage;
pub mod time;

pub use storage::{MemoryStorage, StorageBackend};
pub use time::now_ms;
