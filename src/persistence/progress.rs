use serde::{Deserialize, Serialize};

use crate::catalog::CosmeticItem;
use crate::error::GardenError;
use crate::platform::storage::{StorageBackend, load_json, save_json};

/// Persisted player progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Progress {
    /// 1-based number of the furthest level unlocked
    pub highest_level: u32,
    pub coins: u32,
    /// Plant ids the player owns
    pub unlocked_plants: Vec<u32>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            highest_level: 1,
            coins: 0,
            unlocked_plants: vec![1],
        }
    }
}

impl Progress {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "parque-das-plantas-data";

    /// Load progress; missing or corrupt data yields the defaults
    pub fn load(storage: &dyn StorageBackend) -> Self {
        load_json(storage, Self::STORAGE_KEY).unwrap_or_default()
    }

    pub fn save(&self, storage: &mut dyn StorageBackend) -> Result<(), GardenError> {
        save_json(storage, Self::STORAGE_KEY, self)?;
        log::info!(
            "Progress saved (level {}, {} coins)",
            self.highest_level,
            self.coins
        );
        Ok(())
    }

    /// Overwrite stored progress with the defaults
    pub fn reset(storage: &mut dyn StorageBackend) -> Result<Self, GardenError> {
        let fresh = Self::default();
        save_json(storage, Self::STORAGE_KEY, &fresh)?;
        log::info!("Progress reset");
        Ok(fresh)
    }

    /// Catalog index to resume from
    pub fn resume_index(&self, level_count: usize) -> usize {
        (self.highest_level.max(1) as usize - 1).min(level_count.saturating_sub(1))
    }

    pub fn is_unlocked(&self, plant_id: u32) -> bool {
        self.unlocked_plants.contains(&plant_id)
    }

    /// Add a plant; returns false if it was already owned
    pub fn unlock(&mut self, plant_id: u32) -> bool {
        if self.is_unlocked(plant_id) {
            return false;
        }
        self.unlocked_plants.push(plant_id);
        true
    }

    pub fn add_coins(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
    }

    /// Buy a plant with coins. Fails without side effects when already owned
    /// or unaffordable.
    pub fn purchase(&mut self, item: &CosmeticItem) -> bool {
        if self.is_unlocked(item.id) || self.coins < item.price {
            return false;
        }
        self.coins -= item.price;
        self.unlocked_plants.push(item.id);
        true
    }
}
