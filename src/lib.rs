//! Seed Garden - drag each seed into the bed of its color before time runs out
//!
//! Core modules:
//! - `sim`: Level simulation (layout, timer, drag/drop, scoring, win/loss)
//! - `catalog`: Validated level configurations and unlockable plants
//! - `renderer`: Pure render pass onto a 2D drawing surface
//! - `session`: Host-side glue driving one engine per level
//! - `platform`: Browser/native platform abstraction
//! - `persistence`: Player progress with fallback to defaults

pub mod audio;
pub mod catalog;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, SoundCue};
pub use catalog::{Catalog, CosmeticItem, LevelConfig, Rgb};
pub use error::GardenError;
pub use persistence::Progress;
pub use session::{PlaySession, SessionEvent};
pub use settings::Settings;
pub use sim::{EngineHooks, LevelEngine, LevelState, LevelStatus, WinReport};

/// Game configuration constants
pub mod consts {
    /// Bed dimensions (pixels)
    pub const BED_WIDTH: f32 = 80.0;
    pub const BED_HEIGHT: f32 = 100.0;
    /// Vertical offset of the bed row from the top of the surface
    pub const BED_ROW_Y: f32 = 50.0;

    /// Seed hit radius; pointer-down accepts anything within twice this
    pub const SEED_RADIUS: f32 = 15.0;
    /// Horizontal margin kept free of seeds on both sides
    pub const SEED_MARGIN_X: f32 = 30.0;
    /// Seeds spawn from this far above the vertical midline
    pub const SEED_SPAWN_RISE: f32 = 100.0;

    /// Per-tick exponential smoothing rate toward the target position
    pub const EASE_RATE: f32 = 0.2;
    /// Idle float amplitude (pixels) and period divisor (ms)
    pub const BOB_AMPLITUDE: f32 = 5.0;
    pub const BOB_PERIOD_MS: f64 = 500.0;

    /// Consecutive matches closer than this keep the combo alive
    pub const COMBO_WINDOW_MS: f64 = 3000.0;
    /// Points for one match before the combo multiplier
    pub const BASE_MATCH_POINTS: f32 = 10.0;
    /// Multiplier cap
    pub const MAX_MULTIPLIER: f32 = 3.0;

    /// Stars thresholds on time_left / total_time
    pub const THREE_STAR_RATIO: f32 = 0.6;
    pub const TWO_STAR_RATIO: f32 = 0.3;

    /// Coins per level number on a win (plus whole seconds left)
    pub const COINS_PER_LEVEL: u32 = 20;
}
