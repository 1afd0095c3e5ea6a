//! 2D overlay canvas the cursor trail paints on

use starfolio_scene::{TrailCanvas, Vec2};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::util;

const OVERLAY_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
                           pointer-events: none; z-index: 9998;";

/// Full-viewport canvas above the page content
pub struct OverlayCanvas {
    canvas: web_sys::HtmlCanvasElement,
    ctx: web_sys::CanvasRenderingContext2d,
}

impl OverlayCanvas {
    /// Create the overlay and append it to `<body>`
    pub fn attach(width: f32, height: f32) -> Result<Self, JsValue> {
        let canvas = util::document()?
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        canvas.style().set_css_text(OVERLAY_CSS);
        util::body()?.append_child(&canvas)?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;

        let mut overlay = Self { canvas, ctx };
        overlay.resize(width, height);
        Ok(overlay)
    }

    /// Match the drawing buffer to the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl TrailCanvas for OverlayCanvas {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        let [r, g, b] = rgb;
        self.ctx
            .set_fill_style_str(&format!("rgba({}, {}, {}, {})", r, g, b, alpha));
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius.max(0.0) as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}
