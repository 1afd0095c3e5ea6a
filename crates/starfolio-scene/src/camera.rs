//! Parallax camera
//!
//! The camera sits just in front of the origin and slides sideways with the
//! pointer. Each frame it closes a fixed fraction of the gap to its target
//! (exponential smoothing), then re-aims at the scene origin.

use glam::Mat4;

use crate::config::CameraConfig;
use crate::math::{Vec2, Vec3};

/// Perspective camera driven by pointer parallax
#[derive(Clone, Debug)]
pub struct ParallaxCamera {
    /// World-space position
    pub position: Vec3,
    /// Width / height of the drawing surface
    pub aspect: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    parallax_scale: f32,
    smoothing: f32,
}

impl ParallaxCamera {
    /// Create a camera at `(0, 0, start_z)`
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.start_z),
            aspect,
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            parallax_scale: config.parallax_scale,
            smoothing: config.smoothing,
        }
    }

    /// Target position for a normalised pointer (`[-1, 1]`, y down)
    ///
    /// Screen y grows downward while world y grows upward, hence the flip.
    pub fn target_for(&self, pointer: Vec2) -> Vec3 {
        Vec3::new(
            pointer.x * self.parallax_scale,
            -pointer.y * self.parallax_scale,
            self.position.z,
        )
    }

    /// Close `smoothing` of the remaining distance to the pointer target
    pub fn ease_toward(&mut self, pointer: Vec2) {
        let target = self.target_for(pointer);
        self.position = self.position.approach(target, self.smoothing);
    }

    /// Update the aspect ratio after a resize
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// View matrix looking from the camera position at the origin
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position.to_glam(), glam::Vec3::ZERO, glam::Vec3::Y)
    }

    /// Perspective projection (wgpu clip space, depth 0..1)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined projection * view
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera() -> ParallaxCamera {
        ParallaxCamera::new(&CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn test_starts_in_front_of_origin() {
        let cam = camera();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_target_flips_y() {
        let target = camera().target_for(Vec2::new(1.0, 1.0));
        assert_relative_eq!(target.x, 0.05);
        assert_relative_eq!(target.y, -0.05);
        assert_relative_eq!(target.z, 1.0);
    }

    #[test]
    fn test_single_ease_step() {
        let mut cam = camera();
        cam.ease_toward(Vec2::new(1.0, -1.0));
        assert_relative_eq!(cam.position.x, 0.05 * 0.05);
        assert_relative_eq!(cam.position.y, 0.05 * 0.05);
    }

    #[test]
    fn test_converges_to_target() {
        let mut cam = camera();
        cam.position = Vec3::new(3.0, -2.0, 1.0);
        for _ in 0..1000 {
            cam.ease_toward(Vec2::new(0.5, 0.5));
        }
        assert_relative_eq!(cam.position.x, 0.025, epsilon = 1e-5);
        assert_relative_eq!(cam.position.y, -0.025, epsilon = 1e-5);
    }

    #[test]
    fn test_origin_projects_to_screen_center() {
        let mut cam = camera();
        cam.position = Vec3::new(0.03, -0.02, 1.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_set_aspect_changes_projection() {
        let mut cam = camera();
        let before = cam.projection_matrix();
        cam.set_aspect(1.0);
        assert_ne!(before, cam.projection_matrix());
    }
}
