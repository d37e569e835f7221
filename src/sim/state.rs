//! Level state and core simulation types
//!
//! Everything the UI may read about an in-progress level lives here. The
//! engine owns the only mutable copy; hosts receive `&LevelState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::catalog::Rgb;

/// Lifecycle of one level session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LevelStatus {
    /// No level loaded yet
    #[default]
    Idle,
    /// Timer running, input accepted
    Playing,
    /// Every seed matched (terminal)
    Won,
    /// Timer reached zero (terminal)
    Lost,
}

impl LevelStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LevelStatus::Won | LevelStatus::Lost)
    }
}

/// A draggable token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub id: u32,
    pub color: Rgb,
    /// Rendered position, eased toward `target`
    pub pos: Vec2,
    pub target: Vec2,
    /// Snap-back position after a rejected drop
    pub origin: Vec2,
    pub radius: f32,
    /// Terminal: once set the seed never moves again
    pub matched: bool,
    /// Matches any bed
    pub wildcard: bool,
}

impl Seed {
    pub fn new(id: u32, color: Rgb, pos: Vec2, radius: f32, wildcard: bool) -> Self {
        Self {
            id,
            color,
            pos,
            target: pos,
            origin: pos,
            radius,
            matched: false,
            wildcard,
        }
    }

    /// Pointer hit test (generous: twice the radius)
    pub fn hit(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius * 2.0
    }

    /// Whether this seed may be planted in `bed`
    pub fn fits(&self, bed: &Bed) -> bool {
        self.wildcard || self.color == bed.color
    }

    /// Send the seed back to where it spawned
    pub fn snap_back(&mut self) {
        self.target = self.origin;
    }
}

/// A fixed drop target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bed {
    pub id: u32,
    pub color: Rgb,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Bed {
    /// Strict containment; points on the border are outside
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + self.width
            && point.y > self.pos.y
            && point.y < self.pos.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }
}

/// Complete state of one level session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelState {
    /// Index into the catalog this level was built from
    pub level_index: usize,
    pub status: LevelStatus,
    /// Seconds remaining, never below zero after a tick
    pub time_left: f32,
    /// Snapshot of the level's time limit
    pub total_time: f32,
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    /// Id of the seed under the pointer, if any
    pub dragged: Option<u32>,
    /// Seeds in spawn order (later seeds draw on top)
    pub seeds: Vec<Seed>,
    /// Beds in creation order, left to right
    pub beds: Vec<Bed>,
    /// 1-3 once won, 0 otherwise
    pub stars: u8,
}

impl LevelState {
    pub fn seed(&self, id: u32) -> Option<&Seed> {
        self.seeds.iter().find(|s| s.id == id)
    }

    pub fn dragged_seed(&self) -> Option<&Seed> {
        self.dragged.and_then(|id| self.seed(id))
    }

    pub fn matched_count(&self) -> usize {
        self.seeds.iter().filter(|s| s.matched).count()
    }

    pub fn all_matched(&self) -> bool {
        self.seeds.iter().all(|s| s.matched)
    }

    /// First bed (creation order) containing `point`
    pub fn bed_at(&self, point: Vec2) -> Option<&Bed> {
        self.beds.iter().find(|bed| bed.contains(point))
    }

    /// Whole seconds shown on a HUD countdown
    pub fn display_seconds(&self) -> u32 {
        self.time_left.max(0.0).ceil() as u32
    }
}
