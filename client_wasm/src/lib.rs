//! Browser client for the single-player Pong game
//!
//! Draws on a 2D canvas, drives the simulation from `requestAnimationFrame`,
//! and mirrors the score and messages into the page.

mod diag;
pub mod hud;
pub mod input;
pub mod rally;

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use app::start;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{draw_frame, Config, Game, Side};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent, Window};

    use crate::canvas::CanvasSurface;
    use crate::diag::{console_log, console_warn};
    use crate::hud::{HudTracker, HudView};
    use crate::input::surface_y;
    use crate::rally::RallyLog;

    /// Page elements the score and messages are written into
    struct HudElements {
        player_score: Element,
        ai_score: Element,
        message: Element,
    }

    impl HudElements {
        fn find(document: &Document) -> Result<Self, JsValue> {
            let get = |id: &str| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| JsValue::from_str(&format!("Missing #{} element", id)))
            };
            Ok(Self {
                player_score: get("player-score")?,
                ai_score: get("ai-score")?,
                message: get("message")?,
            })
        }

        fn write(&self, view: &HudView) {
            self.player_score.set_text_content(Some(&view.player_score));
            self.ai_score.set_text_content(Some(&view.ai_score));
            self.message.set_text_content(Some(&view.message));
        }
    }

    struct App {
        game: Game,
        surface: CanvasSurface,
        hud: HudElements,
        hud_tracker: HudTracker,
        rally: RallyLog,
    }

    impl App {
        fn frame(&mut self, now: f64) {
            self.game.frame(now);

            if let Some(rally) = self.rally.observe(&self.game.events) {
                let who = match rally.scorer {
                    Side::Left => "player",
                    Side::Right => "ai",
                };
                console_log!(
                    "Point to {} after {} paddle hits, {} wall bounces ({} - {})",
                    who,
                    rally.paddle_hits,
                    rally.wall_bounces,
                    self.game.score.left,
                    self.game.score.right
                );
            }
            if self.game.events.match_won.is_some() {
                console_log!("Match over, waiting for click");
            }

            draw_frame(&self.game, &mut self.surface, now);

            if let Some(view) = self.hud_tracker.update(&self.game) {
                self.hud.write(&view);
            }
        }
    }

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
    }

    fn now_ms(window: &Window) -> f64 {
        window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut(f64)>) {
        if let Err(e) = window.request_animation_frame(f.as_ref().unchecked_ref()) {
            console_warn!("requestAnimationFrame failed: {:?}", e);
        }
    }

    /// Boot the game on the canvas with id `canvas_id`
    #[wasm_bindgen]
    pub fn start(canvas_id: &str) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing #{} canvas", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()?;

        let config = Config::with_surface(canvas.width() as f32, canvas.height() as f32);
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let game = Game::with_config(config, seed, now_ms(&window));

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(&canvas)?,
            hud: HudElements::find(&document)?,
            hud_tracker: HudTracker::new(),
            rally: RallyLog::new(),
        }));

        attach_input_listeners(&app, &canvas)?;
        start_loop(&app, window)?;

        console_log!("Pong started on #{} ({}x{})", canvas_id, canvas.width(), canvas.height());
        Ok(())
    }

    fn attach_input_listeners(
        app: &Rc<RefCell<App>>,
        canvas: &HtmlCanvasElement,
    ) -> Result<(), JsValue> {
        // mousemove
        {
            let app = Rc::clone(app);
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |evt: MouseEvent| {
                let rect = target.get_bounding_client_rect();
                let y = surface_y(
                    evt.client_y() as f32,
                    rect.top() as f32,
                    rect.height() as f32,
                    target.height() as f32,
                );
                app.borrow_mut().game.pointer_moved(y);
            });
            canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // click restarts a finished match
        {
            let app = Rc::clone(app);
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |_evt: MouseEvent| {
                if app.borrow_mut().game.click() {
                    console_log!("Match restarted");
                }
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_loop(app: &Rc<RefCell<App>>, window: Window) -> Result<(), JsValue> {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = Rc::clone(&callback);
        let app = Rc::clone(app);
        let loop_window = window.clone();

        *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
            app.borrow_mut().frame(now);
            if let Some(f) = next.borrow().as_ref() {
                request_animation_frame(&loop_window, f);
            }
        }));

        let first = callback.borrow();
        let f = first
            .as_ref()
            .ok_or_else(|| JsValue::from_str("Frame callback missing"))?;
        window.request_animation_frame(f.as_ref().unchecked_ref())?;
        Ok(())
    }
}
