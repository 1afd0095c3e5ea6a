//! Browser entry point for the Starfolio portfolio site
//!
//! Wires the DOM to a [`SceneContext`](starfolio_scene::SceneContext):
//! event listeners feed it input, two animation-frame loops drive it.
//!
//! ## Module Structure
//!
//! - `app` - Shared state behind one `Rc`
//! - `frames` - requestAnimationFrame loops
//! - `starfield` - GPU renderer start-up and the background loop
//! - `pointer` - Pointer tracking, cursor glow and the trail loop
//! - `trail_canvas` - 2D overlay canvas implementing `TrailCanvas`
//! - `nav` - Navbar, mobile menu and smooth anchors
//! - `reveal` - Reveal-on-scroll blocks and skill bars
//! - `typing` - Hero subtitle typing effect
//! - `contact` - Contact form
//!
//! ## Start-up
//!
//! The module start hook only installs the panic hook and prints the
//! console banner. The page then calls [`start`] or [`start_with_config`].
//! Each feature is set up independently: if its elements are missing the
//! failure is logged and the rest of the page still runs.

// =============================================================================
// Module declarations
// =============================================================================

mod app;
mod contact;
mod frames;
mod nav;
mod pointer;
mod reveal;
mod starfield;
mod trail_canvas;
mod typing;
mod util;

use std::cell::Cell;
use std::rc::Rc;

use starfolio_scene::page::welcome_banner;
use starfolio_scene::SceneConfig;
use wasm_bindgen::prelude::*;

use app::App;
use util::{log, report};

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn boot() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    for line in welcome_banner() {
        web_sys::console::log_2(&line.text.into(), &line.css.into());
    }
}

/// Start the page with the built-in configuration
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    run(SceneConfig::default())
}

/// Start the page with a JSON configuration; missing fields keep their defaults
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    let config = SceneConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    run(config)
}

fn run(config: SceneConfig) -> Result<(), JsValue> {
    if STARTED.with(|started| started.replace(true)) {
        return Err(JsValue::from_str("starfolio already started"));
    }

    let (width, height) = util::viewport_size()?;
    let app = Rc::new(App::new(config, width, height));
    let page = app.scene.borrow().config.page.clone();
    log(&format!("[page] Starting at {}x{}", width, height));

    report("trail", pointer::init_trail(&app));
    report("cursor", pointer::init_glow(&app));
    report("pointer", pointer::listen_mousemove(&app));
    report("viewport", listen_resize(&app));
    report("nav", nav::listen_scroll(&app));
    report("nav", nav::listen_menu(&app));
    report("nav", nav::listen_anchors());
    report("contact", contact::listen_submit());
    report("starfield", listen_visibility(&app));

    {
        let page = page.clone();
        report(
            "page",
            when_ready("DOMContentLoaded", "loading", move || {
                report("reveal", reveal::observe_blocks(&page));
                report("skills", reveal::observe_skill_bars(&page));
            }),
        );
    }

    report(
        "page",
        when_ready("load", "complete", move || {
            report("typing", typing::start(&page));
            report("starfield", starfield::init(&app));
            report("page", fade_in_body(page.fade_in_delay_ms));
        }),
    );

    Ok(())
}

/// Run `f` on `event`, or now if the document is already past that stage
///
/// `pending_state` is the `readyState` value that means the event is still
/// to come ("loading" for DOMContentLoaded, anything but "complete" for load).
fn when_ready<F: FnOnce() + 'static>(event: &str, pending_state: &str, f: F) -> Result<(), JsValue> {
    let state = util::document()?.ready_state();
    let pending = match pending_state {
        "complete" => state != "complete",
        other => state == other,
    };
    if !pending {
        f();
        return Ok(());
    }

    let mut f = Some(f);
    util::listen(util::window()?.as_ref(), event, move |_: web_sys::Event| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

fn listen_resize(app: &Rc<App>) -> Result<(), JsValue> {
    let app = app.clone();
    util::listen(util::window()?.as_ref(), "resize", move |_: web_sys::Event| {
        let Ok((width, height)) = util::viewport_size() else {
            return;
        };
        let ratio = util::window().map(|w| w.device_pixel_ratio() as f32).unwrap_or(1.0);

        let changed = {
            let mut scene = app.scene.borrow_mut();
            let ratio_changed = scene.viewport.set_pixel_ratio(ratio);
            scene.resize(width, height) || ratio_changed
        };
        if !changed {
            return;
        }
        if let Some(overlay) = app.overlay.borrow_mut().as_mut() {
            overlay.resize(width, height);
        }
        starfield::resize(&app);
    })
}

/// Pause the starfield while the tab is hidden
fn listen_visibility(app: &Rc<App>) -> Result<(), JsValue> {
    let document = util::document()?;
    let app = app.clone();
    let doc = document.clone();
    util::listen(&document, "visibilitychange", move |_: web_sys::Event| {
        let hidden = doc.hidden();
        app.scene.borrow_mut().set_hidden(hidden);
        log(&format!(
            "[starfield] {}",
            if hidden { "Paused" } else { "Resumed" }
        ));
        if !hidden {
            starfield::resume(&app);
        }
    })
}

fn fade_in_body(delay_ms: i32) -> Result<(), JsValue> {
    let body = util::body()?;
    body.style().set_property("opacity", "0")?;
    util::set_timeout(delay_ms, move || {
        let style = body.style();
        let _ = style.set_property("transition", "opacity 1s ease");
        let _ = style.set_property("opacity", "1");
    })
}
