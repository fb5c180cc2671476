//! Flashlight entry point
//!
//! In the browser the scene follows the mouse on a full-window canvas. The
//! native build has no window: it replays a scripted pointer path, draws into
//! a recording canvas and prints a JSON summary of the run.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use flashlight::Settings;
    use flashlight::renderer::draw_frame;
    use flashlight::sim::{Bounds, SceneEvent, SceneState, TickInput, tick};

    /// App instance holding all state
    struct App {
        state: SceneState,
        input: TickInput,
        ctx: CanvasRenderingContext2d,
    }

    impl App {
        /// Run one tick and draw it
        fn frame(&mut self) {
            let report = tick(&mut self.state, &self.input);

            // Clear one-shot inputs after processing
            self.input.click = None;
            self.input.resize = None;

            draw_frame(&mut self.ctx, &self.state, &report);

            for event in report.events {
                match event {
                    SceneEvent::Reveal { url } => open_url(&url),
                }
            }
        }
    }

    fn open_url(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.open_with_url_and_target(url, "_blank") {
            Ok(_) => log::info!("Opened {}", url),
            Err(e) => log::warn!("Could not open {}: {:?}", url, e),
        }
    }

    fn window_bounds(window: &web_sys::Window) -> Bounds {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        Bounds::new(w as f32, h as f32)
    }

    fn size_canvas(canvas: &HtmlCanvasElement, bounds: Bounds) {
        canvas.set_width(bounds.width as u32);
        canvas.set_height(bounds.height as u32);
    }

    fn request_animation_frame(callback: &Closure<dyn FnMut()>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger already set: {e}").into());
        }
        log::info!("Flashlight starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Use the page's canvas if there is one, otherwise make our own
        let canvas: HtmlCanvasElement = match document.get_element_by_id("canvas") {
            Some(el) => el.dyn_into()?,
            None => {
                let el: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
                document.body().ok_or("no body")?.append_child(&el)?;
                el
            }
        };
        canvas.style().set_property("cursor", "none")?;

        let bounds = window_bounds(&window);
        size_canvas(&canvas, bounds);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let state = SceneState::new(bounds, Settings::load(), seed);
        let app = Rc::new(RefCell::new(App {
            input: TickInput {
                pointer: state.emitter.pos,
                ..Default::default()
            },
            state,
            ctx,
        }));

        // Pointer tracking
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().input.pointer =
                    Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click: consumed by the next tick
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().input.click =
                    Some(Vec2::new(event.offset_x() as f32, event.offset_y() as f32));
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Resize: canvas follows the window, the scene rebuilds its border
        {
            let app = app.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let bounds = window_bounds(&window);
                size_canvas(&canvas, bounds);
                app.borrow_mut().input.resize = Some(bounds);
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Animation loop
        let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let next = callback.clone();
        *callback.borrow_mut() = Some(Closure::new(move || {
            app.borrow_mut().frame();
            if let Some(cb) = next.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));
        if let Some(cb) = callback.borrow().as_ref() {
            request_animation_frame(cb);
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_app::run() {
        log::error!("Flashlight failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flashlight (native) starting...");
    log::info!("No window on native - running a scripted headless session");

    let mut args = std::env::args().skip(1);
    let frames = args.next().and_then(|a| a.parse().ok()).unwrap_or(600);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(12345);

    let summary = headless::run(flashlight::Settings::load(), frames, seed);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize summary: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use serde::Serialize;

    use flashlight::Settings;
    use flashlight::renderer::{RecordingCanvas, colors, draw_frame};
    use flashlight::sim::{Bounds, SceneEvent, SceneState, TickInput, tick};

    const START_BOUNDS: Bounds = Bounds {
        width: 1280.0,
        height: 720.0,
    };
    const RESIZED_BOUNDS: Bounds = Bounds {
        width: 1024.0,
        height: 768.0,
    };

    #[derive(Debug, Serialize)]
    pub struct Summary {
        pub seed: u64,
        pub frames: u64,
        pub rays: usize,
        pub mean_hits: f32,
        pub active_frames: u64,
        pub visible_frames: u64,
        pub caught_on_frame: Option<u64>,
        pub revealed: Vec<String>,
        pub last_frame_commands: usize,
    }

    /// Pointer sweeping a Lissajous curve over the scene
    fn pointer_at(frame: u64, bounds: Bounds) -> Vec2 {
        let t = frame as f32 * 0.02;
        let c = bounds.center();
        Vec2::new(
            c.x + (t * 1.3).sin() * bounds.width * 0.45,
            c.y + (t * 0.7).cos() * bounds.height * 0.45,
        )
    }

    pub fn run(settings: Settings, frames: u64, seed: u64) -> Summary {
        let mut state = SceneState::new(START_BOUNDS, settings, seed);
        let mut canvas = RecordingCanvas::default();

        let mut summary = Summary {
            seed,
            frames,
            rays: state.emitter.rays().len(),
            mean_hits: 0.0,
            active_frames: 0,
            visible_frames: 0,
            caught_on_frame: None,
            revealed: Vec::new(),
            last_frame_commands: 0,
        };
        let mut total_hits = 0usize;
        // Once the ball has been lit, the scripted user goes for it
        let mut chase: Option<Vec2> = None;

        for frame in 0..frames {
            let mut input = TickInput {
                pointer: pointer_at(frame, state.bounds),
                ..Default::default()
            };
            if frame == frames / 2 {
                input.resize = Some(RESIZED_BOUNDS);
            }
            if let Some(pos) = chase.take() {
                input.pointer = pos;
                input.click = Some(pos);
            }

            let report = tick(&mut state, &input);
            draw_frame(&mut canvas, &state, &report);

            total_hits += report.hits.len();
            if report.walls_active {
                summary.active_frames += 1;
            }
            if report.target_visible {
                summary.visible_frames += 1;
                debug_assert!(canvas.has_circle(colors::TARGET));
                if summary.caught_on_frame.is_none() {
                    chase = Some(state.target.pos);
                }
            }
            for event in report.events {
                match event {
                    SceneEvent::Reveal { url } => {
                        log::info!("Reveal requested: {}", url);
                        summary.caught_on_frame = Some(report.frame);
                        summary.revealed.push(url);
                    }
                }
            }
            summary.last_frame_commands = canvas.commands.len();
        }

        if frames > 0 {
            summary.mean_hits = total_hits as f32 / frames as f32;
        }
        log::info!(
            "Ran {} frames: ball lit on {} frames, caught on {:?}",
            frames,
            summary.visible_frames,
            summary.caught_on_frame
        );
        summary
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_headless_run() {
            let summary = run(Settings::default(), 400, 7);
            assert_eq!(summary.frames, 400);
            assert_eq!(summary.rays, 360);
            assert!(summary.mean_hits > 300.0);
            assert!(summary.active_frames > 0);
            // At most one reveal per session
            assert!(summary.revealed.len() <= 1);
            assert_eq!(summary.revealed.is_empty(), summary.caught_on_frame.is_none());
        }

        #[test]
        fn test_zero_frames() {
            let summary = run(Settings::default(), 0, 1);
            assert_eq!(summary.mean_hits, 0.0);
            assert_eq!(summary.last_frame_commands, 0);
        }
    }
}
