//! Viewport size shared by both drawing surfaces

use crate::math::Size;

/// Current viewport in CSS pixels plus the device pixel ratio
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: Size,
    pub pixel_ratio: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            size: Size::new(1920.0, 1080.0),
            pixel_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport with the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Apply a new size; returns false when nothing changed
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        let size = Size::new(width, height);
        if size == self.size {
            return false;
        }
        self.size = size;
        true
    }

    /// Set the device pixel ratio; returns false when nothing changed
    pub fn set_pixel_ratio(&mut self, ratio: f32) -> bool {
        if ratio <= 0.0 || ratio == self.pixel_ratio {
            return false;
        }
        self.pixel_ratio = ratio;
        true
    }

    /// Backing-store size in whole device pixels (at least 1x1)
    pub fn device_size(&self) -> (u32, u32) {
        let scaled = self.size.scale(self.pixel_ratio);
        (
            (scaled.width.round() as u32).max(1),
            (scaled.height.round() as u32).max(1),
        )
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.size.aspect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_reports_change() {
        let mut vp = Viewport::new(800.0, 600.0);
        assert!(vp.resize(1024.0, 768.0));
        assert_eq!(vp.size, Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut vp = Viewport::new(800.0, 600.0);
        assert!(vp.resize(1280.0, 720.0));
        let first = vp;
        assert!(!vp.resize(1280.0, 720.0));
        assert_eq!(vp, first);
    }

    #[test]
    fn test_device_size_uses_pixel_ratio() {
        let mut vp = Viewport::new(800.0, 600.0);
        assert!(vp.set_pixel_ratio(2.0));
        assert_eq!(vp.device_size(), (1600, 1200));
        assert!(!vp.set_pixel_ratio(2.0));
        assert!(!vp.set_pixel_ratio(0.0));
    }

    #[test]
    fn test_device_size_never_zero() {
        assert_eq!(Viewport::new(0.0, 0.0).device_size(), (1, 1));
    }
}
