//! Navbar: scrolled state, mobile menu and in-page links

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::frames;
use crate::util::{self, log};

const ACTIVE: &str = "active";
const SCROLLED: &str = "scrolled";

/// Toggle `.navbar.scrolled`, handling at most one scroll per frame
pub fn listen_scroll(app: &Rc<App>) -> Result<(), JsValue> {
    let navbar = util::query(".navbar")?;
    let window = util::window()?;
    let app = app.clone();
    let scroll_window = window.clone();

    util::listen(&window, "scroll", move |_: web_sys::Event| {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        if !app.scene.borrow_mut().scroll.request(scroll_y) {
            return;
        }

        let app = app.clone();
        let navbar = navbar.clone();
        let scheduled = frames::next_frame(move || {
            let mut scene = app.scene.borrow_mut();
            let scroll_y = scene.scroll.frame_done();
            if let Some(scrolled) = scene.nav.on_scroll(scroll_y) {
                let classes = navbar.class_list();
                let _ = if scrolled {
                    classes.add_1(SCROLLED)
                } else {
                    classes.remove_1(SCROLLED)
                };
            }
        });
        if let Err(e) = scheduled {
            log(&format!("[nav] Failed to schedule scroll frame: {:?}", e));
        }
    })
}

/// Mobile menu button and the links that close the menu
pub fn listen_menu(app: &Rc<App>) -> Result<(), JsValue> {
    let button = util::by_id::<web_sys::HtmlElement>("mobile-menu")?;
    let links = util::query(".nav-links")?;

    {
        let app = app.clone();
        let button_el = button.clone();
        let links = links.clone();
        util::listen(&button, "click", move |_: web_sys::Event| {
            let open = app.scene.borrow_mut().nav.toggle_menu();
            set_active(&button_el, open);
            set_active(&links, open);
        })?;
    }

    for link in util::query_all(".nav-link")? {
        let app = app.clone();
        let button = button.clone();
        let links = links.clone();
        util::listen(&link, "click", move |_: web_sys::Event| {
            app.scene.borrow_mut().nav.close_menu();
            set_active(&button, false);
            set_active(&links, false);
        })?;
    }
    Ok(())
}

fn set_active(element: &web_sys::HtmlElement, active: bool) {
    let classes = element.class_list();
    let result = if active {
        classes.add_1(ACTIVE)
    } else {
        classes.remove_1(ACTIVE)
    };
    if let Err(e) = result {
        log(&format!("[nav] Failed to update menu class: {:?}", e));
    }
}

/// Smooth-scroll in-page anchors instead of jumping
pub fn listen_anchors() -> Result<(), JsValue> {
    for anchor in util::query_all("a[href^=\"#\"]")? {
        let href = anchor.get_attribute("href").unwrap_or_default();
        util::listen(&anchor, "click", move |e: web_sys::Event| {
            e.prevent_default();
            // A bare "#" is not a valid selector
            let target = util::document()
                .ok()
                .and_then(|doc| doc.query_selector(&href).ok().flatten());
            if let Some(target) = target {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}
