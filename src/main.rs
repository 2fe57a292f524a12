//! Dino Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use dino_runner::sim::GamePhase;
    use dino_runner::{Session, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session,
        last_time: f64,
        last_phase: Option<GamePhase>,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let mut session = Session::idle();
            session.begin(seed, Tuning::default());
            Self {
                session,
                last_time: 0.0,
                last_phase: None,
            }
        }

        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            self.last_time = time;
            self.session.frame(dt);

            for event in self.session.drain_events() {
                log::debug!("{:?}", event);
            }
        }

        /// Push score and phase banner into the page
        fn update_hud(&mut self) {
            let Some(view) = self.session.view() else {
                return;
            };
            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("no document");

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&view.score_text));
            }

            if self.last_phase != Some(view.phase) {
                self.last_phase = Some(view.phase);
                if let Some(el) = document.get_element_by_id("banner") {
                    let text = match view.phase {
                        GamePhase::Start => "DINO 3D",
                        GamePhase::Playing => "",
                        GamePhase::Dead => "CRASHED",
                    };
                    el.set_text_content(Some(text));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dino Runner starting...");

        let seed = (js_sys::Date::now() as u64) ^ 0x5eed_d1e0;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Dino Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.code() == "Space" && !event.repeat() {
                event.prevent_default();
                game.borrow_mut().session.trigger();
            }
        });
        window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .expect("failed to add keydown listener");
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut(f64)>>));
        let handle = callback.clone();

        *handle.borrow_mut() = Some(Closure::new(move |time: f64| {
            game_loop(&game, time);
            if let Some(cb) = callback.borrow().as_ref() {
                schedule(cb);
            }
        }));

        if let Some(cb) = handle.borrow().as_ref() {
            schedule(cb);
        }
    }

    fn schedule(callback: &Closure<dyn FnMut(f64)>) {
        web_sys::window()
            .expect("no window")
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
    }

    fn game_loop(game: &Rc<RefCell<Game>>, time: f64) {
        let mut g = game.borrow_mut();
        g.update(time);
        g.update_hud();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use dino_runner::sim::{GameEvent, GamePhase};
    use dino_runner::{Session, Tuning};

    env_logger::init();
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use the wasm build to play");

    let seed = 0x00d1_0000;
    let mut session = Session::idle();
    session.set_autopilot(true);
    session.begin(seed, Tuning::default());

    // Two simulated minutes at 60 fps
    let frame_dt = 1.0 / 60.0;
    let mut jumps = 0u32;
    for _ in 0..(120 * 60) {
        session.frame(frame_dt);
        for event in session.drain_events() {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Crashed { score } => log::warn!("Autopilot crashed at {score}"),
                other => log::debug!("{:?}", other),
            }
        }
        if session.phase() == Some(GamePhase::Dead) {
            break;
        }
    }

    if let Some(view) = session.view() {
        println!(
            "Final score {} after {} jumps ({:?}, speed {:.2})",
            view.score_text, jumps, view.phase, view.speed
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
