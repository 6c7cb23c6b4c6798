//! Neon Breakout entry point
//!
//! Wasm: canvas/DOM setup, input handlers, and the requestAnimationFrame
//! loop. Native: a short headless autoplay run for smoke-testing the sim.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use neon_breakout::HighScore;
    use neon_breakout::consts::*;
    use neon_breakout::renderer::Renderer;
    use neon_breakout::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: TickInput,
        renderer: Renderer,
        high_score: HighScore,
        // Phase from the previous frame, to detect the game-over transition
        last_phase: GamePhase,
    }

    impl Game {
        fn new(renderer: Renderer, high_score: HighScore) -> Self {
            Self {
                state: GameState::new(),
                input: TickInput::default(),
                renderer,
                high_score,
                last_phase: GamePhase::Playing,
            }
        }

        /// One display frame: step the sim, draw, refresh the HUD
        fn frame(&mut self) {
            tick(&mut self.state, &self.input);
            self.renderer.render(&self.state);
            self.update_hud();

            let phase = self.state.phase;
            if phase != self.last_phase {
                if phase == GamePhase::GameOver {
                    self.on_game_over();
                }
                self.last_phase = phase;
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let document = web_sys::window().unwrap().document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("level") {
                el.set_text_content(Some(&self.state.level.to_string()));
            }
            if let Some(el) = document.get_element_by_id("lives") {
                el.set_text_content(Some(&self.state.lives.to_string()));
            }
        }

        /// Run ended: persist the best score and reveal the restart control
        fn on_game_over(&mut self) {
            if self.high_score.submit(self.state.score) {
                show_high_score(self.high_score);
            }
            set_restart_visible(true);
        }

        /// Full reset back to a fresh level-1 state
        fn restart(&mut self) {
            self.state = GameState::new();
            self.input = TickInput::default();
            self.last_phase = GamePhase::Playing;
            set_restart_visible(false);
        }
    }

    /// Write the stored best to its HUD slot
    fn show_high_score(best: HighScore) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("highScore") {
            el.set_text_content(Some(&best.0.to_string()));
        }
    }

    /// Show/hide the restart button (the game-over indicator lives on the
    /// canvas and clears on the next rendered frame)
    fn set_restart_visible(visible: bool) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("restartBtn") {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let display = if visible { "block" } else { "none" };
                let _ = el.style().set_property("display", display);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let high_score = HighScore::load();
        show_high_score(high_score);

        let game = Rc::new(RefCell::new(Game::new(Renderer::new(ctx), high_score)));

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Neon Breakout running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Key held
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => g.input.right = true,
                    "ArrowLeft" => g.input.left = true,
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key released
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowRight" => g.input.right = false,
                    "ArrowLeft" => g.input.left = false,
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let was_running = game.borrow().state.running();
                game.borrow_mut().restart();
                log::info!("Game restarted");

                // The loop self-terminated at game over; kick it again.
                // A restart mid-run keeps the already-scheduled loop.
                if !was_running {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = {
            let mut g = game.borrow_mut();
            g.frame();
            g.state.running()
        };

        // Exactly one step per display refresh while the run is live; the
        // loop ends itself on game over and the restart button re-kicks it.
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_breakout::HighScore;
    use neon_breakout::consts::*;
    use neon_breakout::sim::{GameState, TickInput, tick};

    env_logger::init();
    log::info!("Neon Breakout (native) starting...");
    log::info!("Native mode is a headless autoplay - run with `trunk serve` for the web version");

    // Simple tracking autopilot: keep the paddle under the ball
    let mut state = GameState::new();
    let mut best = HighScore::load();
    let mut ticks: u64 = 0;
    let frame_cap = 60 * 60 * 5; // five minutes of 60 Hz frames

    while state.running() && ticks < frame_cap {
        let paddle_center = state.paddle.x + PADDLE_WIDTH / 2.0;
        let input = TickInput {
            right: state.ball.pos.x > paddle_center + PADDLE_SPEED,
            left: state.ball.pos.x < paddle_center - PADDLE_SPEED,
        };
        tick(&mut state, &input);
        ticks += 1;
    }

    best.submit(state.score);
    println!(
        "autoplay finished: {} frames, level {}, score {}, lives {}",
        ticks, state.level, state.score, state.lives
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
