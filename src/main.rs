//! Seed Garden entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, PointerEvent};

    use seed_garden::platform::canvas::CanvasSurface;
    use seed_garden::platform::storage::LocalStorage;
    use seed_garden::platform::{MemoryStorage, StorageBackend};
    use seed_garden::renderer::SpriteAtlas;
    use seed_garden::{
        AudioManager, Catalog, LevelStatus, PlaySession, Progress, SessionEvent, Settings,
    };

    const SPRITE_SHEET: &str = "assets/seeds.png";
    const PENALTY_VIBRATION_MS: u32 = 200;

    /// Game instance holding all state
    struct Game {
        session: PlaySession,
        surface: CanvasSurface,
        storage: Box<dyn StorageBackend>,
        progress: Progress,
        settings: Settings,
    }

    impl Game {
        /// Tick, draw, then react to whatever the level raised
        fn frame(&mut self, time: f64) {
            self.session.frame(time, &mut self.surface);
            for event in self.session.drain_events() {
                self.handle_event(event);
            }
            self.update_hud();
        }

        fn handle_event(&mut self, event: SessionEvent) {
            match event {
                SessionEvent::Penalty => {
                    if self.settings.vibration {
                        if let Some(window) = web_sys::window() {
                            window.navigator().vibrate_with_duration(PENALTY_VIBRATION_MS);
                        }
                    }
                }
                SessionEvent::Planted { .. } => {}
                SessionEvent::Won {
                    coins,
                    stars,
                    unlocked_plant,
                    ..
                } => {
                    self.progress.add_coins(coins);
                    if let Some(plant) = unlocked_plant {
                        self.progress.unlock(plant);
                    }
                    let cleared = self.session.level_index() as u32 + 1;
                    let playable = self.session.catalog().len() as u32;
                    self.progress.highest_level =
                        self.progress.highest_level.max((cleared + 1).min(playable));
                    if let Err(e) = self.progress.save(self.storage.as_mut()) {
                        log::warn!("Failed to save progress: {}", e);
                    }
                    set_text("win-coins", &coins.to_string());
                    set_text("win-stars", &"★".repeat(stars as usize));
                    show("win-overlay", true);
                }
                SessionEvent::Lost => show("lose-overlay", true),
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let state = self.session.state();
            set_text("hud-time", &state.display_seconds().to_string());
            set_text("hud-score", &state.score.to_string());
            set_text("hud-level", &(state.level_index + 1).to_string());
            set_text("hud-coins", &self.progress.coins.to_string());
            if state.combo > 1 {
                set_text("hud-combo", &format!("x{}", state.combo));
            } else {
                set_text("hud-combo", "");
            }
            show(
                "tutorial",
                self.settings.tutorial
                    && state.level_index == 0
                    && state.matched_count() == 0
                    && state.status == LevelStatus::Playing,
            );
        }

        fn restart(&mut self, next: bool) {
            show("win-overlay", false);
            show("lose-overlay", false);
            if next {
                if !self.session.next_level() {
                    log::info!("Last level cleared, replaying it");
                    self.session.retry();
                }
            } else {
                self.session.retry();
            }
        }
    }

    fn set_text(id: &str, text: &str) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn show(id: &str, visible: bool) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Seed Garden starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let width = canvas.client_width().max(1) as u32;
        let height = canvas.client_height().max(1) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let storage: Box<dyn StorageBackend> = match LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => {
                log::warn!("LocalStorage unavailable, progress will not persist");
                Box::new(MemoryStorage::new())
            }
        };
        let progress = Progress::load(storage.as_ref());
        let settings = Settings::load(storage.as_ref());

        let mut audio = AudioManager::new();
        settings.apply(&mut audio);

        let catalog = Catalog::builtin();
        let start = progress.resume_index(catalog.len());
        let session = PlaySession::new(catalog, audio, start, width as f32, height as f32);
        log::info!("Resuming at level {}", start + 1);

        let game = Rc::new(RefCell::new(Game {
            session,
            surface: CanvasSurface::new(ctx),
            storage,
            progress,
            settings,
        }));

        if game.borrow().settings.sprites {
            load_sprites(game.clone())?;
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        show_sound_state(game.borrow().session.audio().is_muted());
        setup_resize(canvas, game.clone());

        request_animation_frame(game);

        log::info!("Seed Garden running!");
        Ok(())
    }

    /// Fetch the seed sprite sheet; circles are drawn until it arrives
    fn load_sprites(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let image = HtmlImageElement::new()?;
        let loaded = image.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            let atlas = SpriteAtlas::builtin(loaded.natural_width() as f32, loaded.natural_height() as f32);
            g.surface.set_sprites(loaded.clone());
            g.session.set_atlas(Some(atlas));
            log::info!("Sprite sheet loaded");
        });
        image.set_onload(Some(closure.as_ref().unchecked_ref()));
        closure.forget();
        image.set_src(SPRITE_SHEET);
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                // one drag at a time: extra fingers are ignored
                if !event.is_primary() {
                    return;
                }
                game.borrow_mut()
                    .session
                    .pointer_down(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if !event.is_primary() {
                    return;
                }
                game.borrow_mut()
                    .session
                    .pointer_move(event.offset_x() as f32, event.offset_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releasing outside the canvas still resolves the drop
        for kind in ["pointerup", "pointercancel"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                if !event.is_primary() {
                    return;
                }
                let mut g = game.borrow_mut();
                g.session.pointer_up();
                for event in g.session.drain_events() {
                    g.handle_event(event);
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };

        for (id, next) in [("retry-btn", false), ("next-btn", true)] {
            let Some(btn) = document.get_element_by_id(id) else { continue };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().restart(next);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("sound-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                let g = &mut *g;
                let on = !g.settings.sound;
                if let Err(e) = g.settings.set_sound(on, g.session.audio_mut(), g.storage.as_mut()) {
                    log::warn!("Failed to save settings: {}", e);
                }
                show_sound_state(g.session.audio().is_muted());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                match Progress::reset(g.storage.as_mut()) {
                    Ok(fresh) => g.progress = fresh,
                    Err(e) => log::warn!("Failed to reset progress: {}", e),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn show_sound_state(muted: bool) {
        set_text("sound-state", if muted { "Off" } else { "On" });
    }

    fn setup_resize(canvas: HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let width = canvas.client_width().max(1) as u32;
            let height = canvas.client_height().max(1) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
            game.borrow_mut().session.resize(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game.borrow_mut().frame(time);
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Seed Garden (native) starting...");
    log::info!("Native mode runs a headless autoplay; serve the wasm build to play");

    autoplay::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Plays every built-in level with a scripted hand, one drop every few frames
#[cfg(not(target_arch = "wasm32"))]
mod autoplay {
    use seed_garden::platform::{MemoryStorage, now_ms};
    use seed_garden::renderer::MeshSurface;
    use seed_garden::{AudioManager, Catalog, PlaySession, Progress, SessionEvent};

    const WIDTH: f32 = 400.0;
    const HEIGHT: f32 = 700.0;
    const FRAME_MS: f64 = 16.0;
    const FRAMES_PER_DROP: u32 = 30;
    const MAX_FRAMES: u32 = 10_000;

    pub fn run() {
        let started = now_ms();
        let catalog = Catalog::builtin();
        let levels = catalog.len();
        let mut storage = MemoryStorage::new();
        let mut progress = Progress::load(&storage);
        let mut session = PlaySession::with_seed(catalog, AudioManager::new(), 0, WIDTH, HEIGHT, 42);
        let mut surface = MeshSurface::new();

        for _ in 0..levels {
            let mut now = 0.0;
            for frame in 0..MAX_FRAMES {
                session.frame(now, &mut surface);
                now += FRAME_MS;
                if session.state().status.is_terminal() {
                    break;
                }
                if frame % FRAMES_PER_DROP == FRAMES_PER_DROP - 1 {
                    drop_next_seed(&mut session);
                }
            }

            for event in session.drain_events() {
                if let SessionEvent::Won {
                    coins,
                    unlocked_plant,
                    ..
                } = event
                {
                    progress.add_coins(coins);
                    if let Some(plant) = unlocked_plant {
                        progress.unlock(plant);
                    }
                }
            }

            let state = session.state();
            println!(
                "Level {}: {:?}, score {}, {} stars, max combo {}, {} vertices last frame",
                state.level_index + 1,
                state.status,
                state.score,
                state.stars,
                state.max_combo,
                surface.vertices.len()
            );

            if !session.next_level() {
                break;
            }
            progress.highest_level = progress.highest_level.max(session.level_index() as u32 + 1);
        }

        match progress.save(&mut storage) {
            Ok(()) => println!(
                "Progress: level {}, {} coins, plants {:?}",
                progress.highest_level, progress.coins, progress.unlocked_plants
            ),
            Err(e) => log::error!("Failed to save progress: {}", e),
        }
        log::info!("Autoplay finished in {:.1} ms", now_ms() - started);
    }

    /// Carry the topmost unplanted seed to a bed it fits
    fn drop_next_seed(session: &mut PlaySession) {
        let state = session.state();
        let Some((seed, bed)) = state.seeds.iter().rev().filter(|s| !s.matched).find_map(|seed| {
            state
                .beds
                .iter()
                .find(|bed| seed.fits(bed))
                .map(|bed| (seed.pos, bed.center()))
        }) else {
            return;
        };
        session.pointer_down(seed.x, seed.y);
        session.pointer_move(bed.x, bed.y);
        session.pointer_up();
    }
}
