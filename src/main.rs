//! Endless Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use endless_runner::platform::web::{CanvasSurface, LocalStorage, WindowPrompt};
    use endless_runner::{Game, LoopControl};

    /// Game plus the browser objects it draws and prompts through
    struct App {
        game: Game<LocalStorage>,
        surface: CanvasSurface,
        prompt: WindowPrompt,
        /// An animation frame is pending
        scheduled: bool,
    }

    fn new_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Endless Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let game = Game::new(LocalStorage::new(), new_seed());
        canvas.set_width(game.world.width() as u32);
        canvas.set_height(game.world.height() as u32);

        let surface = CanvasSurface::new(
            &canvas,
            &document,
            "playerImage",
            "enemyImage",
            "backgroundImage",
        )
        .expect("no 2d context");

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            prompt: WindowPrompt,
            scheduled: false,
        }));

        setup_keyboard(app.clone());
        setup_restart_click(&canvas, app.clone());

        request_animation_frame(app);

        log::info!("Endless Runner running!");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                if a.game.input.press_key(&key) {
                    event.prevent_default();
                    return;
                }
                match key.as_str() {
                    "h" | "H" => a.game.toggle_hitboxes(),
                    "f" | "F" => a.game.toggle_fps(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                app.borrow_mut().game.input.release_key(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_click(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;

            let restarted = app.borrow_mut().game.click(x, y, new_seed());
            if restarted && !app.borrow().scheduled {
                request_animation_frame(app.clone());
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        app.borrow_mut().scheduled = true;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let control = {
            let mut a = app.borrow_mut();
            a.scheduled = false;
            let App {
                game,
                surface,
                prompt,
                ..
            } = &mut *a;
            game.frame(time, surface, prompt)
        };

        // Once ended the last frame stays on screen until a restart click
        if control == LoopControl::Continue {
            request_animation_frame(app);
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
    env_logger::init();
    log::info!("Endless Runner (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    autoplay(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run with a simple jump-when-close autopilot
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(seed: u64) {
    use endless_runner::persistence::MemoryStore;
    use endless_runner::renderer::NullSurface;
    use endless_runner::sim::Direction;
    use endless_runner::{Game, LoopControl};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    let mut game = Game::new(MemoryStore::new(), seed);
    let mut prompt = |_: &str| Some("CPU".to_string());
    let mut time = 0.0;

    for _ in 0..MAX_FRAMES {
        let actor_right = game.world.actor.pos.x + game.world.actor.size.x;
        let threat = game
            .world
            .obstacles
            .iter()
            .any(|o| o.pos.x > actor_right - 10.0 && o.pos.x - actor_right < 45.0);
        if threat {
            game.input.press(Direction::Up);
        } else {
            game.input.release(Direction::Up);
        }

        if game.frame(time, &mut NullSurface, &mut prompt) == LoopControl::Stop {
            break;
        }
        time += FRAME_MS;
    }

    let score = game.world.session.display_score();
    if game.is_running() {
        log::info!("Autopilot survived {} frames, score {}", game.world.frame, score);
    } else {
        log::info!("Autopilot crashed on frame {}, score {}", game.world.frame, score);
    }
    if let Some(board) = game.leaderboard() {
        for (i, entry) in board.entries().iter().enumerate() {
            println!("#{}: {} - {}", i + 1, entry.initials, entry.score);
        }
    }
}
