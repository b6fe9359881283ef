//! Dodger entry point
//!
//! Browser: WebGPU canvas, keyboard input, DOM HUD, requestAnimationFrame loop.
//! Native: headless run with a scripted dodger, for smoke testing the sim.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use dodger::platform::{FpsCounter, KeyAction};
    use dodger::renderer::{Hud, RenderState, Scene};
    use dodger::sim::{GameEvent, GameSession};
    use dodger::{GameConfig, Settings};

    const HIT_POP_FRAMES: u32 = 20;

    /// Game instance holding all state
    struct Game {
        session: GameSession,
        settings: Settings,
        render_state: Option<RenderState>,
        fps: FpsCounter,
        /// Frames left on the lives pop animation
        hit_pop_frames: u32,
    }

    impl Game {
        fn new(config: GameConfig, seed: u64) -> Self {
            Self {
                session: GameSession::new(config.tuning, seed),
                settings: config.settings,
                render_state: None,
                fps: FpsCounter::new(),
                hit_pop_frames: 0,
            }
        }

        fn update(&mut self, time: f64) {
            self.fps.record(time);
            let events = self.session.on_frame(time);
            if events.iter().any(|e| matches!(e, GameEvent::HazardHit { .. })) {
                self.hit_pop_frames = HIT_POP_FRAMES;
            } else {
                self.hit_pop_frames = self.hit_pop_frames.saturating_sub(1);
            }
        }

        fn render(&mut self) {
            let scene = Scene::build(&self.session, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = Hud::build(&self.session);

            let set_text = |selector: &str, text: &str| {
                if let Some(el) = document.query_selector(selector).ok().flatten() {
                    if el.text_content().as_deref() != Some(text) {
                        el.set_text_content(Some(text));
                    }
                }
            };

            set_text("#hud-score .hud-value", &hud.score);
            set_text("#hud-lives .hud-value", &hud.lives);
            if let Some(el) = document.get_element_by_id("hud-lives") {
                // Trigger pop animation
                let class = if self.hit_pop_frames > 0 { "hud-item pop" } else { "hud-item" };
                let _ = el.set_attribute("class", class);
            }
            set_text("#hud-level .hud-value", &hud.level);

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    set_text("#hud-fps .hud-value", &self.fps.fps().to_string());
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            // Flash cue on the HUD too, for screens where the canvas is small
            if let Some(el) = document.get_element_by_id("hud") {
                let flashing = self.settings.effective_flash() && self.session.flash_timer() > 0.0;
                let _ = el.set_attribute("class", if flashing { "flash" } else { "" });
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                match hud.game_over {
                    Some(banner) => {
                        let _ = el.set_attribute("class", "");
                        set_text("#game-over .title", &banner.title);
                        set_text("#game-over .final-score", &banner.final_score);
                        set_text("#game-over .hint", &banner.hint);
                    }
                    None => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Dodger starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let config = GameConfig::load();
        let playfield = (config.tuning.screen_width, config.tuning.screen_height);
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, playfield)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone())?;

        request_animation_frame(game);

        log::info!("Dodger running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = KeyAction::from_key(&event.key()) {
                    event.prevent_default();
                    // Auto-repeat keydowns must not re-trigger restart
                    if event.repeat() && action == KeyAction::Restart {
                        return;
                    }
                    action.apply(&mut game.borrow_mut().session, true);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = KeyAction::from_key(&event.key()) {
                    action.apply(&mut game.borrow_mut().session, false);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-ups are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().session.release_keys();
                log::info!("Window blurred, released keys");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dodger::GameConfig;
    use dodger::sim::{GameEvent, GameSession};

    env_logger::init();
    log::info!("Dodger (native) starting...");
    log::info!("Native mode runs headless - serve the web build for the real game");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let config = GameConfig::load();
    let mut session = GameSession::new(config.tuning, seed);

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_SECONDS: f64 = 180.0;

    let mut hits = 0;
    let mut frame = 0u64;
    while !session.is_game_over() && (frame as f64 * FRAME_MS) < MAX_SECONDS * 1000.0 {
        steer(&mut session);
        for event in session.on_frame(frame as f64 * FRAME_MS) {
            if let GameEvent::HazardHit { .. } = event {
                hits += 1;
            }
        }
        frame += 1;
    }

    println!(
        "Survived {:.1}s, level {}, {} hits, {} lives left",
        session.score(),
        session.difficulty_level() + 1,
        hits,
        session.lives()
    );
}

/// Step away from the nearest hazard above that shares the player's column
#[cfg(not(target_arch = "wasm32"))]
fn steer(session: &mut dodger::sim::GameSession) {
    let player = session.player_rect();
    let threat = session
        .hazards()
        .iter()
        .filter(|h| h.rect.bottom() <= player.bottom())
        .filter(|h| h.rect.right() + 10.0 > player.left() && h.rect.left() - 10.0 < player.right())
        .max_by(|a, b| a.rect.top().total_cmp(&b.rect.top()));

    let (left, right) = match threat {
        Some(h) => {
            let hazard_center = h.rect.left() + h.rect.size.x / 2.0;
            let player_center = player.left() + player.size.x / 2.0;
            let room_left = player.left();
            let room_right = session.tuning().screen_width - player.right();
            if (player_center < hazard_center && room_left > player.size.x) || room_right < player.size.x {
                (true, false)
            } else {
                (false, true)
            }
        }
        None => (false, false),
    };
    session.set_left(left);
    session.set_right(right);
}
