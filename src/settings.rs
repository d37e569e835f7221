//! Game settings and preferences
//!
//! Persisted separately from progress, through the same storage backend.

use serde::{Deserialize, Serialize};

use crate::audio::AudioManager;
use crate::error::GardenError;
use crate::platform::storage::{StorageBackend, load_json, save_json};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects on/off
    pub sound: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Vibrate on mistakes (where the device supports it)
    pub vibration: bool,
    /// Draw seeds from the sprite sheet instead of plain circles
    pub sprites: bool,
    /// Show the how-to-play overlay on the first level
    pub tutorial: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            master_volume: 0.8,
            vibration: true,
            sprites: true,
            tutorial: true,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "parque-das-plantas-settings";

    /// Load settings, falling back to defaults
    pub fn load(storage: &dyn StorageBackend) -> Self {
        match load_json(storage, Self::STORAGE_KEY) {
            Some(settings) => {
                log::info!("Loaded settings");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn StorageBackend) -> Result<(), GardenError> {
        save_json(storage, Self::STORAGE_KEY, self)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Push audio preferences into the audio manager
    pub fn apply(&self, audio: &mut AudioManager) {
        audio.set_muted(!self.sound);
        audio.set_master_volume(self.master_volume);
    }

    /// Sound toggle: takes effect immediately and is persisted
    pub fn set_sound(
        &mut self,
        on: bool,
        audio: &mut AudioManager,
        storage: &mut dyn StorageBackend,
    ) -> Result<(), GardenError> {
        self.sound = on;
        self.apply(audio);
        self.save(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SoundCue;
    use crate::platform::MemoryStorage;

    #[test]
    fn defaults_when_missing_or_corrupt() {
        let mut storage = MemoryStorage::new();
        assert_eq!(Settings::load(&storage), Settings::default());
        storage.set(Settings::STORAGE_KEY, "][").unwrap();
        assert_eq!(Settings::load(&storage), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            sound: false,
            ..Default::default()
        };
        settings.save(&mut storage).unwrap();
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set(Settings::STORAGE_KEY, r#"{"vibration": false}"#).unwrap();
        let settings = Settings::load(&storage);
        assert!(!settings.vibration);
        assert!(settings.sound);
    }

    #[test]
    fn sound_toggle_mutes_and_persists() {
        let mut storage = MemoryStorage::new();
        let mut audio = AudioManager::new();
        let mut settings = Settings::default();

        settings.set_sound(false, &mut audio, &mut storage).unwrap();
        assert!(audio.is_muted());
        assert!(!Settings::load(&storage).sound);

        settings.set_sound(true, &mut audio, &mut storage).unwrap();
        assert!(!audio.is_muted());
        assert!(Settings::load(&storage).sound);
    }

    #[test]
    fn apply_mutes_audio() {
        let mut audio = AudioManager::new();
        let settings = Settings {
            sound: false,
            ..Default::default()
        };
        settings.apply(&mut audio);
        assert_eq!(audio.play(SoundCue::Win), None);
    }
}
