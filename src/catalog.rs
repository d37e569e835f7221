//! Level catalog and unlockable plants
//!
//! Levels are validated once, when a [`Catalog`] is built, so the engine can
//! consume them without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::GardenError;

/// An opaque sRGB color, written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive)
    pub fn from_hex(s: &str) -> Result<Self, GardenError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(GardenError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| GardenError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Normalized RGBA for vertex colors
    pub fn to_rgba(&self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

impl TryFrom<String> for Rgb {
    type Error = GardenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// Palette used by the built-in levels
pub mod palette {
    use super::Rgb;

    pub const RED: Rgb = Rgb::new(0xFF, 0x5E, 0x5E);
    pub const BLUE: Rgb = Rgb::new(0x5E, 0x7D, 0xFF);
    pub const YELLOW: Rgb = Rgb::new(0xFF, 0xF3, 0x5E);
    pub const GREEN: Rgb = Rgb::new(0x5E, 0xFF, 0x7D);
    /// Sentinel color carried by wildcard seeds
    pub const WILDCARD: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
}

/// Configuration for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: u32,
    /// One bed per color, left to right
    pub colors: Vec<Rgb>,
    pub seeds_count: u32,
    /// Seconds on the clock at start
    pub time_limit: f32,
    /// Seconds lost per mismatched drop
    pub penalty: f32,
    /// Whether the last seed of the level is a wildcard
    #[serde(default)]
    pub wildcard: bool,
}

impl LevelConfig {
    fn validate(&self) -> Result<(), GardenError> {
        let invalid = |reason: &str| GardenError::InvalidLevel {
            id: self.id,
            reason: reason.to_string(),
        };

        if self.colors.is_empty() {
            return Err(invalid("palette is empty"));
        }
        for (i, color) in self.colors.iter().enumerate() {
            if *color == palette::WILDCARD {
                return Err(invalid("palette uses the wildcard color"));
            }
            if self.colors[..i].contains(color) {
                return Err(invalid(&format!("duplicate color {}", color.to_hex())));
            }
        }
        if self.seeds_count == 0 {
            return Err(invalid("seeds_count must be positive"));
        }
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(invalid("time_limit must be positive"));
        }
        if !self.penalty.is_finite() || self.penalty < 0.0 {
            return Err(invalid("penalty must be non-negative"));
        }
        Ok(())
    }
}

/// Ordered, validated list of levels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    levels: Vec<LevelConfig>,
}

impl Catalog {
    /// Build a catalog, validating every level
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, GardenError> {
        if levels.is_empty() {
            return Err(GardenError::EmptyCatalog);
        }
        for level in &levels {
            level.validate()?;
        }
        Ok(Self { levels })
    }

    /// Parse a JSON array of level configs
    pub fn from_json(json: &str) -> Result<Self, GardenError> {
        let levels: Vec<LevelConfig> = serde_json::from_str(json)?;
        let catalog = Self::new(levels)?;
        log::info!("Loaded catalog with {} levels", catalog.len());
        Ok(catalog)
    }

    /// The three levels the game ships with
    pub fn builtin() -> Self {
        use palette::*;

        Self {
            levels: vec![
                LevelConfig {
                    id: 1,
                    colors: vec![RED, BLUE, YELLOW],
                    seeds_count: 6,
                    time_limit: 20.0,
                    penalty: 2.0,
                    wildcard: false,
                },
                LevelConfig {
                    id: 2,
                    colors: vec![RED, BLUE, YELLOW, GREEN],
                    seeds_count: 10,
                    time_limit: 25.0,
                    penalty: 3.0,
                    wildcard: false,
                },
                LevelConfig {
                    id: 3,
                    colors: vec![RED, BLUE, YELLOW, GREEN],
                    seeds_count: 12,
                    time_limit: 25.0,
                    penalty: 4.0,
                    wildcard: true,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    /// Index of the final level
    pub fn last_index(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// A cosmetic plant unlocked with coins or wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CosmeticItem {
    pub id: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub price: u32,
}

pub const PLANTS: &[CosmeticItem] = &[
    CosmeticItem {
        id: 1,
        name: "Margarida",
        icon: "🌼",
        price: 0,
    },
    CosmeticItem {
        id: 2,
        name: "Girassol",
        icon: "🌻",
        price: 50,
    },
    CosmeticItem {
        id: 3,
        name: "Cacto",
        icon: "🌵",
        price: 100,
    },
    CosmeticItem {
        id: 4,
        name: "Rosa",
        icon: "🌹",
        price: 200,
    },
    CosmeticItem {
        id: 5,
        name: "Tulipa",
        icon: "🌷",
        price: 350,
    },
];

pub fn plant_by_id(id: u32) -> Option<&'static CosmeticItem> {
    PLANTS.iter().find(|plant| plant.id == id)
}

/// Plant offered for clearing the level at `level_index` (the next one in the list)
pub fn plant_unlocked_by(level_index: usize) -> Option<&'static CosmeticItem> {
    PLANTS.get(level_index + 1)
}
