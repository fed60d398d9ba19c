//! Ball Pit entry point
//!
//! Handles platform-specific initialization and drives the frame loop. All
//! DOM lookup, input-event plumbing, and surface sizing lives here; the sim
//! only ever sees logical bounds and normalized spawn requests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlButtonElement, HtmlCanvasElement, MouseEvent, TouchEvent};

    use ball_pit::SimConfig;
    use ball_pit::consts::RESIZE_DEBOUNCE_MS;
    use ball_pit::render::CanvasSurface;
    use ball_pit::sim::{Bounds, Phase, Session, SpawnRequest, SpawnSource};

    /// App instance holding the session and its canvas surface
    struct App {
        session: Session,
        surface: CanvasSurface,
    }

    impl App {
        /// Run one frame and refresh the HUD.
        fn frame(&mut self) {
            self.session.tick(&mut self.surface);
            self.update_hud();
        }

        /// Apply a (debounced) resize: restore the backing store and hand
        /// the new logical bounds to the session.
        fn resize(&mut self, canvas: &HtmlCanvasElement, dpr: f64) {
            let width = canvas.client_width() as f32;
            let height = canvas.client_height() as f32;
            self.surface.resize(width, height, dpr);
            self.session.set_bounds(Bounds::new(width, height));
        }

        /// Mirror session state into the DOM: ball counter, game-over
        /// notice, and control enablement.
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("ball-count") {
                el.set_text_content(Some(&self.session.ball_count().to_string()));
            }

            let over = self.session.phase() == Phase::Over;

            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", if over { "" } else { "hidden" });
            }

            for id in ["add-ball-btn", "clear-btn"] {
                if let Some(btn) = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
                {
                    btn.set_disabled(over);
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ball Pit starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let dpr = window.device_pixel_ratio();
        let surface = CanvasSurface::new(&canvas, dpr).expect("Failed to create surface");
        let (width, height) = surface.size();

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(SimConfig::default(), Bounds::new(width, height), seed);
        let app = Rc::new(RefCell::new(App { session, surface }));

        setup_input_handlers(&canvas, app.clone());
        setup_buttons(app.clone());
        setup_resize(canvas.clone(), app.clone(), dpr);

        request_animation_frame(app);

        log::info!("Ball Pit running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Click spawns at the pointer, kind chosen by coin flip
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().session.spawn(SpawnRequest::PointAt {
                    x: event.offset_x() as f32,
                    y: event.offset_y() as f32,
                    source: SpawnSource::Click,
                });
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch spawns at the touch point, always Accelerating
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let x = touch.client_x() as f32 - rect.left() as f32;
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    app.borrow_mut()
                        .session
                        .spawn(SpawnRequest::PointAt {
                            x,
                            y,
                            source: SpawnSource::Touch,
                        });
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("add-ball-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.spawn(SpawnRequest::Random);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("clear-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.clear_balls();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().session.restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Collapse bursts of resize events into one bounds change, delivered
    /// after RESIZE_DEBOUNCE_MS of quiet.
    fn setup_resize(canvas: HtmlCanvasElement, app: Rc<RefCell<App>>, dpr: f64) {
        let window = web_sys::window().unwrap();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let apply = Closure::<dyn FnMut()>::new({
            let pending = pending.clone();
            move || {
                pending.set(None);
                app.borrow_mut().resize(&canvas, dpr);
            }
        });

        let on_resize = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            if let Some(id) = pending.take() {
                window.clear_timeout_with_handle(id);
            }
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                apply.as_ref().unchecked_ref(),
                RESIZE_DEBOUNCE_MS,
            ) {
                pending.set(Some(id));
            }
        });
        let _ = window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            app.borrow_mut().frame();
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ball_pit::SimConfig;
    use ball_pit::render::DrawSurface;
    use ball_pit::sim::{Bounds, Hsl, Phase, Session, SpawnRequest};

    /// Headless surface for the native smoke run
    struct NullSurface;

    impl DrawSurface for NullSurface {
        fn clear(&mut self) {}
        fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: Hsl) {}
    }

    env_logger::init();
    log::info!("Ball Pit (native) starting...");
    log::info!("Native mode is a headless smoke run - use `trunk serve` for the web version");

    let mut session = Session::new(SimConfig::default(), Bounds::new(800.0, 600.0), 1);
    let mut surface = NullSurface;

    for _ in 0..120 {
        session.tick(&mut surface);
    }
    while session.phase() == Phase::Playing {
        session.spawn(SpawnRequest::Random);
    }
    session.tick(&mut surface);

    println!(
        "smoke run complete: {} balls, phase {:?}",
        session.ball_count(),
        session.phase()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
