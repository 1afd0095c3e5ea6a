//! Pointer tracking, the cursor glow and the trail loop

use std::rc::Rc;

use starfolio_scene::page::HOVER_SELECTORS;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::App;
use crate::frames;
use crate::trail_canvas::OverlayCanvas;
use crate::util::{self, log};

/// Create the trail overlay and start its frame loop
///
/// The trail keeps animating while the page is hidden; only the starfield
/// pauses.
pub fn init_trail(app: &Rc<App>) -> Result<(), JsValue> {
    let (width, height) = {
        let scene = app.scene.borrow();
        (scene.viewport.size.width, scene.viewport.size.height)
    };
    *app.overlay.borrow_mut() = Some(OverlayCanvas::attach(width, height)?);

    let app = app.clone();
    frames::run_loop(move || {
        if let Some(overlay) = app.overlay.borrow_mut().as_mut() {
            app.scene.borrow_mut().tick_trail(overlay);
        }
        true
    })
}

/// Create the glow element and enlarge it over interactive elements
pub fn init_glow(app: &Rc<App>) -> Result<(), JsValue> {
    let glow = util::document()?
        .create_element("div")?
        .dyn_into::<web_sys::HtmlElement>()?;
    glow.class_list().add_1("cursor-glow")?;
    glow.style().set_css_text(&app.scene.borrow().cursor.css_text());
    util::body()?.append_child(&glow)?;
    *app.glow.borrow_mut() = Some(glow);

    for element in util::query_all(HOVER_SELECTORS)? {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let app = app.clone();
            util::listen(&element, event, move |_: web_sys::Event| {
                let mut scene = app.scene.borrow_mut();
                scene.cursor.set_hovering(hovering);
                if let Some(glow) = app.glow.borrow().as_ref() {
                    let _ = glow.style().set_property("transform", &scene.cursor.transform());
                }
            })?;
        }
    }
    Ok(())
}

/// Feed pointer moves into the scene: camera target, trail and glow
pub fn listen_mousemove(app: &Rc<App>) -> Result<(), JsValue> {
    let app = app.clone();
    util::listen(util::document()?.as_ref(), "mousemove", move |e: web_sys::MouseEvent| {
        let (x, y) = (e.client_x() as f32, e.client_y() as f32);
        let mut scene = app.scene.borrow_mut();
        scene.pointer_moved(x, y);

        if let Some(glow) = app.glow.borrow().as_ref() {
            let corner = scene.cursor.top_left();
            let style = glow.style();
            let placed = style
                .set_property("left", &format!("{}px", corner.x))
                .and_then(|_| style.set_property("top", &format!("{}px", corner.y)));
            if let Err(e) = placed {
                log(&format!("[cursor] Failed to move glow: {:?}", e));
            }
        }
    })
}
