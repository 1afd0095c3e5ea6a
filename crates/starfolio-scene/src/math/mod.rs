//! Geometry types shared by the scene
//!
//! `Vec2` is screen space (CSS pixels, y down), `Vec3` is world space for
//! the starfield and camera.

mod size;
mod vec2;
mod vec3;

pub use size::Size;
pub use vec2::Vec2;
pub use vec3::Vec3;
