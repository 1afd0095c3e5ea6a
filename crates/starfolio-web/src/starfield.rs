//! Starfield background: renderer start-up and its frame loop

use std::rc::Rc;

use starfolio_scene::background::StarfieldRenderer;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;
use crate::frames;
use crate::util::{self, log};

/// Id of the canvas the starfield draws into
pub const CANVAS_ID: &str = "starfield";

/// Create the GPU renderer and start the background loop once it is ready
pub fn init(app: &Rc<App>) -> Result<(), JsValue> {
    let canvas: web_sys::HtmlCanvasElement = util::by_id(CANVAS_ID)?;

    let pending = {
        let mut scene = app.scene.borrow_mut();
        let ratio = util::window()?.device_pixel_ratio() as f32;
        scene.viewport.set_pixel_ratio(ratio);
        let (width, height) = scene.viewport.device_size();
        canvas.set_width(width);
        canvas.set_height(height);
        StarfieldRenderer::new(canvas, &scene)
    };

    log("[starfield] Initializing WebGPU starfield renderer...");
    let app = app.clone();
    spawn_local(async move {
        match pending.await {
            Ok(renderer) => {
                log("[starfield] Renderer initialized");
                *app.renderer.borrow_mut() = Some(renderer);
                resume(&app);
            }
            Err(e) => log(&format!("[starfield] Failed to initialize renderer: {}", e)),
        }
    });
    Ok(())
}

/// Schedule the background loop unless a frame is already pending
pub fn resume(app: &Rc<App>) {
    if app.background_scheduled.get() || app.renderer.borrow().is_none() {
        return;
    }
    app.background_scheduled.set(true);

    let loop_app = app.clone();
    let started = frames::run_loop(move || {
        let keep_going = frame(&loop_app);
        loop_app.background_scheduled.set(keep_going);
        keep_going
    });
    if let Err(e) = started {
        app.background_scheduled.set(false);
        log(&format!("[starfield] Failed to start frame loop: {:?}", e));
    }
}

/// One background frame; false once the loop should stop scheduling
fn frame(app: &App) -> bool {
    let mut scene = app.scene.borrow_mut();
    if scene.tick_background(util::now_ms()).is_none() {
        return false;
    }

    let mut renderer = app.renderer.borrow_mut();
    let Some(renderer) = renderer.as_mut() else {
        return false;
    };
    match renderer.render(&scene) {
        Ok(()) => true,
        Err(e) if e.is_transient() => true,
        Err(e) => {
            log(&format!("[starfield] Render failed, stopping: {}", e));
            false
        }
    }
}

/// Resize the starfield canvas and surface to the current viewport
pub fn resize(app: &App) {
    let scene = app.scene.borrow();
    let (width, height) = scene.viewport.device_size();

    if let Ok(canvas) = util::by_id::<web_sys::HtmlCanvasElement>(CANVAS_ID) {
        canvas.set_width(width);
        canvas.set_height(height);
    }
    if let Some(renderer) = app.renderer.borrow_mut().as_mut() {
        renderer.resize(width, height);
    }
}
