//! 3D vector for world-space positions

use serde::{Deserialize, Serialize};

/// 3D vector in world space (right-handed, camera looks down -z)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Origin
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Move a fraction `t` of the way toward `target`
    #[inline]
    pub fn approach(self, target: Vec3, t: f32) -> Vec3 {
        self + (target - self) * t
    }

    /// Convert to a glam vector for matrix math
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// As a plain array (GPU layout)
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::ops::Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_moves_fraction_of_gap() {
        let v = Vec3::new(0.0, 10.0, 1.0).approach(Vec3::new(10.0, 0.0, 1.0), 0.25);
        assert!((v.x - 2.5).abs() < 0.001);
        assert!((v.y - 7.5).abs() < 0.001);
        assert!((v.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_approach_full_step_reaches_target() {
        let target = Vec3::new(-4.0, 2.0, 9.0);
        assert_eq!(Vec3::ZERO.approach(target, 1.0), target);
    }
}
