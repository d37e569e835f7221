//! Play session: the host-side owner of one level engine
//!
//! Wires the engine to the render pass, the match particles and the audio
//! cues, and turns wins into coin rewards. Pages/overlays read the state and
//! drain [`SessionEvent`]s; they never touch the engine directly.

use crate::audio::{AudioManager, SoundCue};
use crate::catalog::{Catalog, LevelConfig, plant_unlocked_by};
use crate::renderer::{MatchBurst, SpriteAtlas, Surface, render};
use crate::sim::{EngineHooks, LevelEngine, LevelState, Seed, WinReport, coins_for_win};

/// Longest frame the particle effect will simulate in one step (seconds)
const MAX_FRAME_DT: f32 = 0.1;
/// Combo at which plants use the combo cue
const COMBO_CUE_THRESHOLD: u32 = 3;

/// Something the UI should react to
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Wrong bed: shake/vibrate
    Penalty,
    Planted { seed_id: u32, combo: u32 },
    Won {
        coins: u32,
        stars: u8,
        score: u32,
        /// Plant offered for clearing this level
        unlocked_plant: Option<u32>,
    },
    Lost,
}

/// Engine hooks owned by the session
#[derive(Debug, Default)]
struct SessionHooks {
    pending: Vec<SessionEvent>,
    burst: MatchBurst,
}

impl EngineHooks for SessionHooks {
    fn on_penalty(&mut self) {
        self.pending.push(SessionEvent::Penalty);
    }

    fn on_loss(&mut self) {
        self.pending.push(SessionEvent::Lost);
    }

    fn on_win(&mut self, report: &WinReport) {
        self.pending.push(SessionEvent::Won {
            coins: coins_for_win(report.level_index, report.time_left),
            stars: report.stars,
            score: report.score,
            unlocked_plant: plant_unlocked_by(report.level_index).map(|p| p.id),
        });
    }

    fn on_seed_matched(&mut self, seed: &Seed) {
        self.burst.on_seed_matched(seed);
        // combo is filled in once the drop has been fully resolved
        self.pending.push(SessionEvent::Planted {
            seed_id: seed.id,
            combo: 0,
        });
    }
}

pub struct PlaySession {
    engine: LevelEngine<SessionHooks>,
    catalog: Catalog,
    audio: AudioManager,
    atlas: Option<SpriteAtlas>,
    level_index: usize,
    size: (f32, f32),
    last_frame_ms: Option<f64>,
    events: Vec<SessionEvent>,
}

impl PlaySession {
    /// Start `level_index` on a `width` x `height` surface
    pub fn new(catalog: Catalog, audio: AudioManager, level_index: usize, width: f32, height: f32) -> Self {
        Self::with_engine(LevelEngine::new(SessionHooks::default()), catalog, audio, level_index, width, height)
    }

    /// Same as [`PlaySession::new`] with a reproducible layout
    pub fn with_seed(
        catalog: Catalog,
        audio: AudioManager,
        level_index: usize,
        width: f32,
        height: f32,
        seed: u64,
    ) -> Self {
        let engine = LevelEngine::with_seed(SessionHooks::default(), seed);
        Self::with_engine(engine, catalog, audio, level_index, width, height)
    }

    fn with_engine(
        engine: LevelEngine<SessionHooks>,
        catalog: Catalog,
        audio: AudioManager,
        level_index: usize,
        width: f32,
        height: f32,
    ) -> Self {
        let mut session = Self {
            engine,
            catalog,
            audio,
            atlas: None,
            level_index,
            size: (width, height),
            last_frame_ms: None,
            events: Vec::new(),
        };
        session.start(level_index);
        session
    }

    /// (Re)start a level from scratch
    pub fn start(&mut self, level_index: usize) {
        self.level_index = level_index;
        self.last_frame_ms = None;
        self.events.clear();
        let hooks = self.engine.hooks_mut();
        hooks.pending.clear();
        hooks.burst.clear();
        let (width, height) = self.size;
        self.engine.init_level(level_index, &self.catalog, width, height);
        self.audio.play_music("garden");
    }

    pub fn retry(&mut self) {
        self.start(self.level_index);
    }

    /// Advance to the next catalog level; false on the last one
    pub fn next_level(&mut self) -> bool {
        if self.level_index >= self.catalog.last_index() {
            return false;
        }
        self.start(self.level_index + 1);
        true
    }

    /// New surface size. The level is laid out again from scratch.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = (width, height);
        self.start(self.level_index);
    }

    pub fn set_atlas(&mut self, atlas: Option<SpriteAtlas>) {
        self.atlas = atlas;
    }

    pub fn state(&self) -> &LevelState {
        self.engine.state()
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level(&self) -> Option<&LevelConfig> {
        self.catalog.get(self.level_index)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    pub fn particles(&self) -> &MatchBurst {
        &self.engine.hooks().burst
    }

    /// Tick the engine and paint one frame
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> &LevelState {
        let dt = self
            .last_frame_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0) as f32)
            .clamp(0.0, MAX_FRAME_DT);
        self.last_frame_ms = Some(now_ms);

        self.engine.update(now_ms);
        self.engine.hooks_mut().burst.update(dt);
        self.flush();

        let (width, height) = self.size;
        render(
            self.engine.state(),
            width,
            height,
            self.atlas.as_ref(),
            self.engine.hovered_bed(),
            surface,
        );
        self.engine.hooks().burst.draw(surface);

        self.engine.state()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let before = self.engine.state().dragged;
        self.engine.pointer_down(x, y);
        let after = self.engine.state().dragged;
        if after.is_some() && after != before {
            self.audio.play(SoundCue::Pickup);
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.engine.pointer_move(x, y);
    }

    /// Drop the held seed using the current level's penalty
    pub fn pointer_up(&mut self) {
        let penalty = self.level().map_or(0.0, |level| level.penalty);
        self.engine.pointer_up(penalty);
        self.flush();
    }

    /// Events raised since the last call
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Move engine notifications to the outbox, playing their cues
    fn flush(&mut self) {
        let combo = self.engine.state().combo;
        let pending = std::mem::take(&mut self.engine.hooks_mut().pending);
        for mut event in pending {
            let cue = match &mut event {
                SessionEvent::Penalty => SoundCue::Mismatch,
                SessionEvent::Planted { combo: c, .. } => {
                    *c = combo;
                    if combo >= COMBO_CUE_THRESHOLD {
                        SoundCue::Combo
                    } else {
                        SoundCue::Plant
                    }
                }
                SessionEvent::Won { coins, stars, .. } => {
                    log::info!("Reward: {} coins, {} stars", coins, stars);
                    SoundCue::Win
                }
                SessionEvent::Lost => SoundCue::Lose,
            };
            self.audio.play(cue);
            self.events.push(event);
        }
    }
}
