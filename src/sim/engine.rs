//! Level engine: setup, per-frame update and pointer-driven drag/drop
//!
//! The engine is the only writer of [`LevelState`]. Hosts drive it with
//! `update(now)` once per frame and forward pointer events; everything they
//! need to draw or display is read back through [`LevelEngine::state`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::{bed_row, spawn_point};
use super::scoring::{combo_after_match, match_points, stars_for};
use super::state::{LevelState, LevelStatus, Seed};
use crate::catalog::{Catalog, palette};
use crate::consts::*;

/// Summary handed to [`EngineHooks::on_win`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinReport {
    pub level_index: usize,
    pub score: u32,
    pub stars: u8,
    /// Seconds left at the moment the last seed was planted
    pub time_left: f32,
    pub max_combo: u32,
}

/// Observer for engine events. Every method defaults to a no-op.
///
/// Hooks run synchronously inside the engine call that triggered them and
/// must not block.
pub trait EngineHooks {
    /// A seed was dropped on a bed of another color
    fn on_penalty(&mut self) {}
    /// The timer reached zero
    fn on_loss(&mut self) {}
    /// The last seed was planted
    fn on_win(&mut self, _report: &WinReport) {}
    /// A seed was planted (fires before `on_win` for the final seed)
    fn on_seed_matched(&mut self, _seed: &Seed) {}
}

impl EngineHooks for () {}

/// Simulation for one level at a time
pub struct LevelEngine<H: EngineHooks = ()> {
    state: LevelState,
    hooks: H,
    rng: Pcg32,
    /// Timestamp of the previous `update`, `None` right after init
    last_tick_ms: Option<f64>,
    last_match_ms: Option<f64>,
    /// Not reset between levels so ids never repeat within an engine
    next_id: u32,
}

impl<H: EngineHooks + Default> Default for LevelEngine<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: EngineHooks> LevelEngine<H> {
    /// Engine with a randomly seeded layout RNG
    pub fn new(hooks: H) -> Self {
        Self::from_rng(hooks, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Engine with a reproducible layout RNG
    pub fn with_seed(hooks: H, seed: u64) -> Self {
        Self::from_rng(hooks, Pcg32::seed_from_u64(seed))
    }

    fn from_rng(hooks: H, rng: Pcg32) -> Self {
        Self {
            state: LevelState::default(),
            hooks,
            rng,
            last_tick_ms: None,
            last_match_ms: None,
            next_id: 1,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn state(&self) -> &LevelState {
        &self.state
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Bed currently under the dragged seed, for highlighting
    pub fn hovered_bed(&self) -> Option<u32> {
        let seed = self.state.dragged_seed()?;
        self.state.bed_at(seed.pos).map(|bed| bed.id)
    }

    /// Replace all level state with a fresh layout for `catalog[level_index]`.
    ///
    /// An out-of-range index leaves the engine idle.
    pub fn init_level(&mut self, level_index: usize, catalog: &Catalog, width: f32, height: f32) {
        let Some(config) = catalog.get(level_index) else {
            log::error!(
                "Level index {} out of range (catalog has {})",
                level_index,
                catalog.len()
            );
            self.state = LevelState::default();
            return;
        };

        let beds = bed_row(&config.colors, width, || self.next_entity_id());

        let count = config.seeds_count as usize;
        let mut seeds = Vec::with_capacity(count);
        for i in 0..count {
            let wildcard = config.wildcard && i == count - 1;
            let color = if wildcard {
                palette::WILDCARD
            } else {
                config.colors[self.rng.random_range(0..config.colors.len())]
            };
            let pos = spawn_point(&mut self.rng, width, height);
            let id = self.next_entity_id();
            seeds.push(Seed::new(id, color, pos, SEED_RADIUS, wildcard));
        }

        self.state = LevelState {
            level_index,
            status: LevelStatus::Playing,
            time_left: config.time_limit,
            total_time: config.time_limit,
            score: 0,
            combo: 0,
            max_combo: 0,
            dragged: None,
            seeds,
            beds,
            stars: 0,
        };
        self.last_tick_ms = None;
        self.last_match_ms = None;

        log::info!(
            "Level {} started: {} beds, {} seeds, {}s",
            config.id,
            self.state.beds.len(),
            self.state.seeds.len(),
            config.time_limit
        );
    }

    /// Advance the timer and idle animation to `now_ms` (monotonic milliseconds)
    pub fn update(&mut self, now_ms: f64) -> &LevelState {
        if self.state.status != LevelStatus::Playing {
            return &self.state;
        }

        let elapsed = self.last_tick_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_tick_ms = Some(now_ms);

        self.state.time_left -= (elapsed / 1000.0) as f32;
        if self.state.time_left <= 0.0 {
            self.state.time_left = 0.0;
            self.lose();
            return &self.state;
        }

        let dragged = self.state.dragged;
        for (i, seed) in self.state.seeds.iter_mut().enumerate() {
            if seed.matched || dragged == Some(seed.id) {
                continue;
            }
            let bob = ((now_ms / BOB_PERIOD_MS + i as f64).sin() as f32) * BOB_AMPLITUDE;
            let goal = seed.target + Vec2::new(0.0, bob);
            seed.pos += (goal - seed.pos) * EASE_RATE;
        }

        &self.state
    }

    fn lose(&mut self) {
        self.state.status = LevelStatus::Lost;
        self.release_drag();
        log::info!("Level {} lost", self.state.level_index + 1);
        self.hooks.on_loss();
    }

    /// Drop whatever is held without resolving it against the beds
    fn release_drag(&mut self) {
        if let Some(id) = self.state.dragged.take() {
            if let Some(seed) = self.state.seeds.iter_mut().find(|s| s.id == id) {
                seed.snap_back();
            }
        }
    }

    /// Pick up the topmost unmatched seed under the pointer. Ignored while
    /// another seed is held.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.state.status != LevelStatus::Playing || self.state.dragged.is_some() {
            return;
        }
        let point = Vec2::new(x, y);
        self.state.dragged = self
            .state
            .seeds
            .iter()
            .rev()
            .find(|seed| !seed.matched && seed.hit(point))
            .map(|seed| seed.id);
    }

    /// Move the held seed directly to the pointer
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some(id) = self.state.dragged else { return };
        if let Some(seed) = self.state.seeds.iter_mut().find(|s| s.id == id) {
            seed.pos = Vec2::new(x, y);
            seed.target = seed.pos;
        }
    }

    /// Resolve the drop of the held seed against the beds
    pub fn pointer_up(&mut self, penalty_seconds: f32) {
        let Some(id) = self.state.dragged.take() else { return };
        let Some(idx) = self.state.seeds.iter().position(|s| s.id == id) else {
            return;
        };

        let seed = &self.state.seeds[idx];
        let outcome = self
            .state
            .bed_at(seed.pos)
            .map(|bed| (bed.id, seed.fits(bed)));

        match outcome {
            Some((bed_id, true)) => self.plant(idx, bed_id),
            Some((bed_id, false)) => {
                self.state.combo = 0;
                self.state.time_left -= penalty_seconds;
                self.state.seeds[idx].snap_back();
                log::debug!("Seed {} rejected by bed {} (-{}s)", id, bed_id, penalty_seconds);
                self.hooks.on_penalty();
            }
            None => self.state.seeds[idx].snap_back(),
        }
    }

    fn plant(&mut self, idx: usize, bed_id: u32) {
        let now = self.last_tick_ms.unwrap_or(0.0);
        let state = &mut self.state;

        state.seeds[idx].matched = true;
        state.combo = combo_after_match(state.combo, self.last_match_ms, now);
        state.max_combo = state.max_combo.max(state.combo);
        self.last_match_ms = Some(now);

        let points = match_points(state.combo);
        state.score += points;
        log::debug!(
            "Seed {} planted in bed {} (+{}, combo {})",
            state.seeds[idx].id,
            bed_id,
            points,
            state.combo
        );

        self.hooks.on_seed_matched(&self.state.seeds[idx]);
        self.check_win();
    }

    fn check_win(&mut self) {
        if self.state.status != LevelStatus::Playing || !self.state.all_matched() {
            return;
        }

        let state = &mut self.state;
        state.status = LevelStatus::Won;
        // a penalty may have overdrawn the clock since the last tick
        state.time_left = state.time_left.max(0.0);
        state.stars = stars_for(state.time_left, state.total_time);

        let report = WinReport {
            level_index: state.level_index,
            score: state.score,
            stars: state.stars,
            time_left: state.time_left,
            max_combo: state.max_combo,
        };
        log::info!(
            "Level {} won: score {}, {} stars, {:.1}s left",
            report.level_index + 1,
            report.score,
            report.stars,
            report.time_left
        );
        self.hooks.on_win(&report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LevelConfig, Rgb};
    use crate::sim::state::Bed;
    use std::collections::HashSet;

    const W: f32 = 400.0;
    const H: f32 = 600.0;

    #[derive(Default)]
    struct Recorder {
        penalties: u32,
        losses: u32,
        wins: Vec<WinReport>,
        matched: Vec<u32>,
    }

    impl EngineHooks for Recorder {
        fn on_penalty(&mut self) {
            self.penalties += 1;
        }
        fn on_loss(&mut self) {
            self.losses += 1;
        }
        fn on_win(&mut self, report: &WinReport) {
            self.wins.push(report.clone());
        }
        fn on_seed_matched(&mut self, seed: &Seed) {
            self.matched.push(seed.id);
        }
    }

    fn custom(colors: Vec<Rgb>, seeds: u32, time_limit: f32, penalty: f32) -> Catalog {
        Catalog::new(vec![LevelConfig {
            id: 1,
            colors,
            seeds_count: seeds,
            time_limit,
            penalty,
            wildcard: false,
        }])
        .unwrap()
    }

    fn engine_on(catalog: &Catalog, level: usize) -> LevelEngine<Recorder> {
        let mut engine = LevelEngine::with_seed(Recorder::default(), 7);
        engine.init_level(level, catalog, W, H);
        engine
    }

    /// Grab the topmost unmatched seed
    fn grab_top(engine: &mut LevelEngine<Recorder>) -> Seed {
        let seed = engine
            .state()
            .seeds
            .iter()
            .rev()
            .find(|s| !s.matched)
            .cloned()
            .expect("an unmatched seed");
        engine.pointer_down(seed.pos.x, seed.pos.y);
        assert_eq!(engine.state().dragged, Some(seed.id));
        seed
    }

    fn bed_where(engine: &LevelEngine<Recorder>, pred: impl Fn(&Bed) -> bool) -> Bed {
        engine
            .state()
            .beds
            .iter()
            .find(|b| pred(b))
            .cloned()
            .expect("a bed")
    }

    fn drop_at(engine: &mut LevelEngine<Recorder>, at: Vec2, penalty: f32) {
        engine.pointer_move(at.x, at.y);
        engine.pointer_up(penalty);
    }

    /// Plant the topmost seed in a bed it fits
    fn plant_top(engine: &mut LevelEngine<Recorder>) -> Seed {
        let seed = grab_top(engine);
        let bed = bed_where(engine, |b| seed.fits(b));
        drop_at(engine, bed.center(), 0.0);
        seed
    }

    #[test]
    fn second_press_keeps_the_held_seed() {
        let catalog = custom(vec![palette::RED], 3, 20.0, 2.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);

        let held = grab_top(&mut engine);
        let bed = engine.state().beds[0].clone();
        engine.pointer_move(bed.center().x, bed.center().y);

        let other = engine
            .state()
            .seeds
            .iter()
            .find(|s| s.id != held.id)
            .cloned()
            .unwrap();
        engine.pointer_down(other.pos.x, other.pos.y);
        assert_eq!(engine.state().dragged, Some(held.id));

        engine.pointer_up(2.0);
        assert!(engine.state().seed(held.id).unwrap().matched);
        assert!(!engine.state().seed(other.id).unwrap().matched);

        for tick in 1..=120 {
            engine.update(tick as f64 * 16.0);
        }
        for seed in engine.state().seeds.iter().filter(|s| !s.matched) {
            assert_eq!(seed.target, seed.origin);
        }
        assert_eq!(engine.hooks().matched, vec![held.id]);
    }

    #[test]
    fn penalty_overdraw_then_win_clamps_clock() {
        let catalog = custom(vec![palette::RED, palette::BLUE], 1, 1.0, 5.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);

        let seed = grab_top(&mut engine);
        let wrong = bed_where(&engine, |b| !seed.fits(b));
        drop_at(&mut engine, wrong.center(), 5.0);
        assert!(engine.state().time_left < 0.0);
        assert_eq!(engine.state().status, LevelStatus::Playing);

        plant_top(&mut engine);
        let state = engine.state();
        assert_eq!(state.status, LevelStatus::Won);
        assert_eq!(state.time_left, 0.0);
        assert_eq!(state.stars, 1);
        assert_eq!(engine.hooks().wins[0].time_left, 0.0);
    }

    #[test]
    fn init_builds_layout() {
        let catalog = Catalog::builtin();
        for (index, config) in catalog.levels().iter().enumerate() {
            let engine = engine_on(&catalog, index);
            let state = engine.state();
            assert_eq!(state.status, LevelStatus::Playing);
            assert_eq!(state.beds.len(), config.colors.len());
            assert_eq!(state.seeds.len(), config.seeds_count as usize);
            assert_eq!(state.time_left, config.time_limit);
            assert_eq!(state.total_time, config.time_limit);
            assert_eq!((state.score, state.combo, state.max_combo), (0, 0, 0));
            for seed in &state.seeds {
                assert!(seed.wildcard || config.colors.contains(&seed.color));
                assert_eq!(seed.target, seed.origin);
                assert!(seed.pos.y >= H / 2.0 - 100.0 && seed.pos.y <= H);
            }
        }
    }

    #[test]
    fn wildcard_only_when_configured() {
        let catalog = Catalog::builtin();
        for index in 0..2 {
            let engine = engine_on(&catalog, index);
            assert!(engine.state().seeds.iter().all(|s| !s.wildcard));
        }
        let engine = engine_on(&catalog, 2);
        let wildcards: Vec<&Seed> = engine.state().seeds.iter().filter(|s| s.wildcard).collect();
        assert_eq!(wildcards.len(), 1);
        assert_eq!(wildcards[0].color, palette::WILDCARD);
        assert_eq!(wildcards[0].id, engine.state().seeds.last().unwrap().id);
    }

    #[test]
    fn reinit_replaces_everything() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        plant_top(&mut engine);
        assert!(engine.state().score > 0);

        let ids = |e: &LevelEngine<Recorder>| -> HashSet<u32> {
            e.state()
                .seeds
                .iter()
                .map(|s| s.id)
                .chain(e.state().beds.iter().map(|b| b.id))
                .collect()
        };
        let before = ids(&engine);
        engine.init_level(0, &catalog, W, H);
        let after = ids(&engine);

        assert!(before.is_disjoint(&after));
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().matched_count(), 0);
    }

    #[test]
    fn out_of_range_level_stays_idle() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 9);
        assert_eq!(engine.state().status, LevelStatus::Idle);
        engine.update(1000.0);
        engine.pointer_down(0.0, 0.0);
        assert_eq!(engine.state().dragged, None);
    }

    #[test]
    fn matching_drop_plants_seed() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);

        let seed = plant_top(&mut engine);
        let state = engine.state();
        assert!(state.seed(seed.id).unwrap().matched);
        assert_eq!(state.score, 10);
        assert_eq!(state.combo, 1);
        assert_eq!(state.dragged, None);
        assert_eq!(engine.hooks().matched, vec![seed.id]);
    }

    #[test]
    fn wildcard_fits_any_bed() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 2);
        engine.update(0.0);

        let seed = grab_top(&mut engine);
        assert!(seed.wildcard);
        let bed = engine.state().beds[1].clone();
        drop_at(&mut engine, bed.center(), 4.0);
        assert!(engine.state().seed(seed.id).unwrap().matched);
        assert_eq!(engine.hooks().penalties, 0);
    }

    #[test]
    fn mismatch_costs_time_and_combo() {
        let catalog = custom(vec![palette::RED, palette::BLUE], 8, 20.0, 3.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        plant_top(&mut engine);
        assert_eq!(engine.state().combo, 1);

        let time_before = engine.state().time_left;
        let seed = grab_top(&mut engine);
        let wrong = bed_where(&engine, |b| b.color != seed.color);
        drop_at(&mut engine, wrong.center(), 3.0);

        let state = engine.state();
        let after = state.seed(seed.id).unwrap();
        assert!(!after.matched);
        assert_eq!(after.target, after.origin);
        assert_eq!(state.combo, 0);
        assert_eq!(state.time_left, time_before - 3.0);
        assert_eq!(state.score, 10);
        assert_eq!(engine.hooks().penalties, 1);
    }

    #[test]
    fn drop_outside_beds_snaps_back() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);

        let seed = grab_top(&mut engine);
        drop_at(&mut engine, Vec2::new(W / 2.0, H - 20.0), 2.0);

        let state = engine.state();
        let after = state.seed(seed.id).unwrap();
        assert!(!after.matched);
        assert_eq!(after.target, seed.origin);
        assert_eq!(state.time_left, 20.0);
        assert_eq!(engine.hooks().penalties, 0);
    }

    #[test]
    fn rejected_seed_floats_home() {
        let catalog = custom(vec![palette::RED, palette::BLUE], 4, 100.0, 1.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);

        let seed = grab_top(&mut engine);
        let wrong = bed_where(&engine, |b| b.color != seed.color);
        drop_at(&mut engine, wrong.center(), 1.0);

        for frame in 1..=60 {
            engine.update(frame as f64 * 16.0);
        }
        let after = engine.state().seed(seed.id).unwrap();
        assert!((after.pos.x - seed.origin.x).abs() < 0.01);
        assert!((after.pos.y - seed.origin.y).abs() <= BOB_AMPLITUDE + 0.01);
        // bob never leaks into the target
        assert_eq!(after.target, seed.origin);
    }

    #[test]
    fn matched_seed_never_moves() {
        let catalog = custom(vec![palette::RED], 3, 100.0, 0.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        let seed = plant_top(&mut engine);
        let planted_at = engine.state().seed(seed.id).unwrap().pos;

        for frame in 1..=30 {
            engine.update(frame as f64 * 16.0);
        }
        engine.pointer_down(planted_at.x, planted_at.y);
        engine.pointer_move(0.0, 0.0);
        engine.pointer_up(0.0);
        assert_eq!(engine.state().seed(seed.id).unwrap().pos, planted_at);
    }

    #[test]
    fn pointer_down_prefers_topmost() {
        let catalog = custom(vec![palette::RED], 3, 100.0, 0.0);
        let mut engine = engine_on(&catalog, 0);
        let spot = Vec2::new(200.0, 400.0);
        for seed in engine.state.seeds.iter_mut() {
            seed.pos = spot;
        }
        engine.pointer_down(spot.x + 5.0, spot.y);
        assert_eq!(engine.state().dragged, Some(engine.state().seeds[2].id));

        engine.pointer_up(0.0);
        engine.state.seeds[2].matched = true;
        engine.pointer_down(spot.x, spot.y);
        assert_eq!(engine.state().dragged, Some(engine.state().seeds[1].id));
    }

    #[test]
    fn pointer_down_misses_quietly() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        engine.pointer_down(-500.0, -500.0);
        assert_eq!(engine.state().dragged, None);
        engine.pointer_up(5.0);
        assert_eq!(engine.state().time_left, 20.0);
    }

    #[test]
    fn combo_multiplier_within_window() {
        let catalog = custom(vec![palette::GREEN], 6, 100.0, 0.0);
        let mut engine = engine_on(&catalog, 0);

        let mut scores = Vec::new();
        for t in [0.0, 1000.0, 2000.0, 3000.0, 4000.0] {
            engine.update(t);
            let before = engine.state().score;
            plant_top(&mut engine);
            scores.push(engine.state().score - before);
        }
        assert_eq!(scores, vec![10, 10, 15, 15, 15]);
        assert_eq!(engine.state().combo, 5);

        // 4s gap breaks the chain
        engine.update(8000.0);
        let before = engine.state().score;
        plant_top(&mut engine);
        assert_eq!(engine.state().score - before, 10);
        assert_eq!(engine.state().combo, 1);
        assert_eq!(engine.state().max_combo, 5);
    }

    #[test]
    fn win_fires_once_with_stars() {
        let catalog = custom(vec![palette::RED], 2, 20.0, 0.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        engine.update(7000.0);
        assert_eq!(engine.state().time_left, 13.0);

        plant_top(&mut engine);
        assert_eq!(engine.state().status, LevelStatus::Playing);
        assert!(engine.hooks().wins.is_empty());
        plant_top(&mut engine);

        assert_eq!(engine.state().status, LevelStatus::Won);
        assert_eq!(engine.state().stars, 3);
        assert_eq!(engine.hooks().wins.len(), 1);
        assert_eq!(engine.hooks().wins[0].stars, 3);
        assert_eq!(engine.hooks().wins[0].time_left, 13.0);

        engine.update(9000.0);
        engine.pointer_down(0.0, 0.0);
        engine.pointer_up(0.0);
        assert_eq!(engine.hooks().wins.len(), 1);
        assert_eq!(engine.state().time_left, 13.0);
    }

    #[test]
    fn late_win_earns_one_star() {
        let catalog = custom(vec![palette::RED], 1, 20.0, 0.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        engine.update(15_000.0);
        plant_top(&mut engine);
        assert_eq!(engine.state().stars, 1);
        assert_eq!(engine.hooks().wins[0].stars, 1);
    }

    #[test]
    fn timer_expiry_loses_once() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        engine.update(19_000.0);
        assert_eq!(engine.state().status, LevelStatus::Playing);

        engine.update(20_500.0);
        assert_eq!(engine.state().status, LevelStatus::Lost);
        assert_eq!(engine.state().time_left, 0.0);
        assert_eq!(engine.hooks().losses, 1);

        engine.update(30_000.0);
        assert_eq!(engine.hooks().losses, 1);
        engine.pointer_down(0.0, 0.0);
        assert_eq!(engine.state().dragged, None);
    }

    #[test]
    fn penalty_to_zero_loses_on_next_update() {
        let catalog = custom(vec![palette::RED, palette::BLUE], 4, 3.0, 5.0);
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);

        let seed = grab_top(&mut engine);
        let wrong = bed_where(&engine, |b| b.color != seed.color);
        drop_at(&mut engine, wrong.center(), 5.0);
        assert_eq!(engine.state().time_left, -2.0);
        assert_eq!(engine.state().status, LevelStatus::Playing);

        engine.update(0.0);
        assert_eq!(engine.state().status, LevelStatus::Lost);
        assert_eq!(engine.state().time_left, 0.0);
        assert_eq!(engine.hooks().losses, 1);
    }

    #[test]
    fn loss_releases_held_seed() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        engine.update(0.0);
        let seed = grab_top(&mut engine);
        engine.pointer_move(10.0, 10.0);
        engine.update(25_000.0);

        assert_eq!(engine.state().status, LevelStatus::Lost);
        assert_eq!(engine.state().dragged, None);
        assert_eq!(engine.state().seed(seed.id).unwrap().target, seed.origin);
    }

    #[test]
    fn hovered_bed_follows_drag() {
        let catalog = Catalog::builtin();
        let mut engine = engine_on(&catalog, 0);
        assert_eq!(engine.hovered_bed(), None);
        grab_top(&mut engine);
        let bed = engine.state().beds[2].clone();
        engine.pointer_move(bed.center().x, bed.center().y);
        assert_eq!(engine.hovered_bed(), Some(bed.id));
    }
}
