//! Shared page state
//!
//! One `App` lives behind an `Rc` for the page's lifetime; every listener
//! and frame callback holds a clone. The browser never runs two of them at
//! once, so `RefCell` borrows never overlap as long as none is held across
//! an `.await`.

use std::cell::{Cell, RefCell};

use starfolio_scene::background::StarfieldRenderer;
use starfolio_scene::{SceneConfig, SceneContext};

use crate::trail_canvas::OverlayCanvas;

pub struct App {
    pub scene: RefCell<SceneContext>,
    /// Set once the GPU renderer is ready
    pub renderer: RefCell<Option<StarfieldRenderer>>,
    /// Missing when the 2D context is unavailable
    pub overlay: RefCell<Option<OverlayCanvas>>,
    /// Cursor glow element, if it could be created
    pub glow: RefCell<Option<web_sys::HtmlElement>>,
    /// Whether a background frame is currently scheduled
    pub background_scheduled: Cell<bool>,
}

impl App {
    pub fn new(config: SceneConfig, width: f32, height: f32) -> Self {
        Self {
            scene: RefCell::new(SceneContext::from_entropy(config, width, height)),
            renderer: RefCell::new(None),
            overlay: RefCell::new(None),
            glow: RefCell::new(None),
            background_scheduled: Cell::new(false),
        }
    }
}
