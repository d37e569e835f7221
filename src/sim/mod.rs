//! Level simulation module
//!
//! All gameplay logic lives here:
//! - Bed/seed layout per level
//! - Timer and idle easing per frame
//! - Pointer drag/drop resolution, combo and scoring
//! - Win/loss detection
//!
//! No rendering or platform dependencies.

pub mod engine;
pub mod layout;
pub mod scoring;
pub mod state;

pub use engine::{EngineHooks, LevelEngine, WinReport};
pub use layout::{bed_row, bed_spacing, spawn_point};
pub use scoring::{coins_for_win, combo_after_match, match_points, multiplier, stars_for};
pub use state::{Bed, LevelState, LevelStatus, Seed};
