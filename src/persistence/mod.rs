//! Player progress persistence
//!
//! A single JSON blob under a fixed key. Missing or corrupt data silently
//! resets to defaults; there is no versioning or integrity check.

pub mod progress;

pub use progress::Progress;
