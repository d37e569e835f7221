//! Sound cues
//!
//! The host builds one [`AudioManager`] and hands it to whatever needs to
//! make noise. There is no global instance. Cues are announced through the
//! log; wiring them to real samples is up to the embedding page.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Seed picked up
    Pickup,
    /// Seed planted in its bed
    Plant,
    /// Plant landed while a combo of 3+ is running
    Combo,
    /// Seed dropped on the wrong bed
    Mismatch,
    /// Level cleared
    Win,
    /// Timer ran out
    Lose,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Pickup => "pickup",
            SoundCue::Plant => "plant",
            SoundCue::Combo => "combo",
            SoundCue::Mismatch => "mismatch",
            SoundCue::Win => "win",
            SoundCue::Lose => "lose",
        }
    }

    /// Relative loudness of the cue
    fn base_volume(&self) -> f32 {
        match self {
            SoundCue::Pickup => 0.3,
            SoundCue::Win | SoundCue::Lose => 0.7,
            _ => 0.5,
        }
    }
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    muted: bool,
    /// Background track currently requested
    music: Option<&'static str>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            muted: false,
            music: None,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Play a sound effect; returns the volume it played at, `None` if silent
    pub fn play(&self, cue: SoundCue) -> Option<f32> {
        let vol = self.effective_volume() * cue.base_volume();
        if vol <= 0.0 {
            return None;
        }
        log::debug!("[audio] sfx {} @ {:.2}", cue.name(), vol);
        Some(vol)
    }

    /// Request a looping background track
    pub fn play_music(&mut self, track: &'static str) {
        if self.music == Some(track) {
            return;
        }
        self.music = Some(track);
        if !self.muted {
            log::debug!("[audio] bgm {}", track);
        }
    }

    pub fn music(&self) -> Option<&'static str> {
        self.music
    }
}
