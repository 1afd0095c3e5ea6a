//! Starfield GPU renderer
//!
//! WebGPU (falling back to WebGL2) renderer for the two point clouds held by
//! [`StarField`](crate::StarField).
//!
//! ## Design
//!
//! - Each point is an instance; the vertex shader expands it to a
//!   camera-facing quad (6 vertices, no index buffer)
//! - Stars are re-uploaded every frame, the nebula once at start-up
//! - One shared uniform buffer (camera, fog, rotation) plus one small
//!   material buffer per cloud (size, opacity, spin)
//! - Additive blending over a transparent clear so the page shows through

mod error;
mod init;
mod render;
mod renderer;
mod shader;
mod uniforms;

pub use error::RenderError;
pub use renderer::StarfieldRenderer;
pub use uniforms::{MaterialUniforms, SceneUniforms};
