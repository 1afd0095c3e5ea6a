use crate::camera::ParallaxCamera;

/// Per-frame uniform data shared by both clouds
/// NOTE: This struct must match WGSL alignment requirements!
/// Total struct size is 96 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4], // offset 0
    pub camera_pos: [f32; 3],     // offset 64
    pub time: f32,                // offset 76
    pub resolution: [f32; 2],     // offset 80
    pub fog_density: f32,         // offset 88
    pub rotation_y: f32,          // offset 92
}

impl SceneUniforms {
    /// Build uniforms from the camera and frame state
    pub fn from_camera(
        camera: &ParallaxCamera,
        time: f32,
        width: u32,
        height: u32,
        fog_density: f32,
        rotation_y: f32,
    ) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.position.to_array(),
            time,
            resolution: [width as f32, height as f32],
            fog_density,
            rotation_y,
        }
    }
}

/// Per-cloud material
/// Total struct size is 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    pub size: f32,    // offset 0
    pub opacity: f32, // offset 4
    /// 1.0 when the cloud follows the star rotation, 0.0 when static
    pub spin: f32,    // offset 8
    pub _pad: f32,    // offset 12
}

impl MaterialUniforms {
    pub fn new(size: f32, opacity: f32, spin: bool) -> Self {
        Self {
            size,
            opacity,
            spin: if spin { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_match_wgsl() {
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 96);
        assert_eq!(std::mem::size_of::<MaterialUniforms>(), 16);
    }

    #[test]
    fn test_material_spin_flag() {
        assert_eq!(MaterialUniforms::new(2.0, 0.8, true).spin, 1.0);
        assert_eq!(MaterialUniforms::new(15.0, 0.1, false).spin, 0.0);
    }
}
