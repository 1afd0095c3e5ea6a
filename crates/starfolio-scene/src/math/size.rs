//! Viewport dimensions

use serde::{Deserialize, Serialize};

/// Width and height in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Get aspect ratio (width / height)
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Scale both dimensions (CSS pixels to device pixels)
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_aspect() {
        let s = Size::new(1920.0, 1080.0);
        assert!((s.aspect() - 16.0 / 9.0).abs() < 0.001);
    }

    #[test]
    fn test_size_aspect_zero_height() {
        assert!((Size::new(800.0, 0.0).aspect() - 1.0).abs() < 0.001);
        assert!(Size::new(800.0, 0.0).is_empty());
    }

    #[test]
    fn test_size_scale() {
        let scaled = Size::new(100.0, 50.0).scale(2.0);
        assert!((scaled.width - 200.0).abs() < 0.001);
        assert!((scaled.height - 100.0).abs() < 0.001);
    }
}
