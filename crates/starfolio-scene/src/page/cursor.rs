//! Cursor glow that follows the pointer

use crate::config::PageConfig;
use crate::math::Vec2;

/// Elements that enlarge the glow while hovered
pub const HOVER_SELECTORS: &str = "a, button, .project-card";

/// Glow element position and scale
#[derive(Clone, Debug)]
pub struct CursorGlow {
    radius: f32,
    hover_scale: f32,
    top_left: Vec2,
    hovering: bool,
}

impl CursorGlow {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            radius: config.cursor_glow_radius,
            hover_scale: config.cursor_hover_scale,
            top_left: Vec2::ZERO,
            hovering: false,
        }
    }

    /// Centre the glow on the pointer
    pub fn follow(&mut self, x: f32, y: f32) -> Vec2 {
        self.top_left = Vec2::new(x - self.radius, y - self.radius);
        self.top_left
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Top-left corner for the element's `left`/`top`
    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn scale(&self) -> f32 {
        if self.hovering {
            self.hover_scale
        } else {
            1.0
        }
    }

    /// `transform` value for the current scale
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale())
    }

    /// Inline style for the glow element
    pub fn css_text(&self) -> String {
        let size = self.radius * 2.0;
        format!(
            "position: fixed; width: {size}px; height: {size}px; border-radius: 50%; \
             background: radial-gradient(circle, rgba(0, 255, 136, 0.6), transparent); \
             pointer-events: none; z-index: 9999; mix-blend-mode: screen; \
             transition: transform 0.1s ease;"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_offsets_by_radius() {
        let mut glow = CursorGlow::new(&PageConfig::default());
        assert_eq!(glow.follow(100.0, 50.0), Vec2::new(90.0, 40.0));
    }

    #[test]
    fn test_hover_scale() {
        let mut glow = CursorGlow::new(&PageConfig::default());
        assert_eq!(glow.transform(), "scale(1)");
        glow.set_hovering(true);
        assert_eq!(glow.transform(), "scale(3)");
        glow.set_hovering(false);
        assert_eq!(glow.scale(), 1.0);
    }

    #[test]
    fn test_css_size() {
        let glow = CursorGlow::new(&PageConfig::default());
        assert!(glow.css_text().contains("width: 20px; height: 20px"));
    }
}
