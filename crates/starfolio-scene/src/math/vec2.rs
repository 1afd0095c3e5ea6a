//! 2D vector for screen positions and particle velocities

use serde::{Deserialize, Serialize};

/// 2D vector in screen space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, other: Vec2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, s: f32) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_step_by_velocity() {
        let mut pos = Vec2::new(10.0, 20.0);
        let vel = Vec2::new(1.5, -0.5);
        pos += vel;
        pos += vel;
        assert!((pos.x - 13.0).abs() < 0.001);
        assert!((pos.y - 19.0).abs() < 0.001);
    }

    #[test]
    fn test_vec2_sub_and_scale() {
        let offset = (Vec2::new(3.0, 4.0) - Vec2::new(1.0, 1.0)) * 2.0;
        assert!((offset.x - 4.0).abs() < 0.001);
        assert!((offset.y - 6.0).abs() < 0.001);
    }
}
