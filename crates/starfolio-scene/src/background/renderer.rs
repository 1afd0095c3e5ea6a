use std::future::Future;

use super::error::RenderError;
use super::init::*;
use super::render::{render_clouds, CloudDraw};
use super::uniforms::{MaterialUniforms, SceneUniforms};
use crate::scene::SceneContext;
use crate::starfield::PointInstance;

/// Intermediate struct for GPU resources during initialization
struct GpuResources {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    surface_format: wgpu::TextureFormat,
    scene_layout: wgpu::BindGroupLayout,
    scene_bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
}

/// Scene data the renderer starts from, copied out before any await
struct SceneSnapshot {
    width: u32,
    height: u32,
    uniforms: SceneUniforms,
    stars: Vec<PointInstance>,
    nebula: Vec<PointInstance>,
    star_material: MaterialUniforms,
    nebula_material: MaterialUniforms,
}

impl SceneSnapshot {
    fn capture(scene: &SceneContext) -> Self {
        let (width, height) = scene.viewport.device_size();
        let stars = &scene.config.starfield;
        let nebula = &scene.config.nebula;
        Self {
            width,
            height,
            uniforms: StarfieldRenderer::build_uniforms(scene, 0.0, width, height),
            stars: scene.starfield.stars().to_vec(),
            nebula: scene.starfield.nebula().to_vec(),
            // Only the stars follow the field rotation
            star_material: MaterialUniforms::new(stars.material_size, stars.opacity, true),
            nebula_material: MaterialUniforms::new(nebula.material_size, nebula.opacity, false),
        }
    }
}

/// Intermediate struct for render resources during initialization
struct CloudResources {
    pipeline: wgpu::RenderPipeline,
    star_buffer: wgpu::Buffer,
    star_material: wgpu::BindGroup,
    star_count: u32,
    nebula_buffer: wgpu::Buffer,
    nebula_material: wgpu::BindGroup,
    nebula_count: u32,
}

/// Draws the star and nebula clouds of a [`SceneContext`] onto a canvas
pub struct StarfieldRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    scene_bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    clouds: CloudResources,
    start_time: f64,
}

impl StarfieldRenderer {
    /// Create a renderer sized to the scene viewport
    ///
    /// The scene is read before this returns, so the caller need not keep
    /// it borrowed while the future runs.
    pub fn new(
        canvas: web_sys::HtmlCanvasElement,
        scene: &SceneContext,
    ) -> impl Future<Output = Result<Self, RenderError>> + 'static {
        let snapshot = SceneSnapshot::capture(scene);
        async move {
            let (instance, surface) = Self::create_surface(canvas)?;
            let gpu = Self::setup_gpu(&instance, &surface, &snapshot).await?;
            let clouds = Self::setup_clouds(&gpu, &snapshot);

            Ok(Self::assemble(surface, gpu, clouds))
        }
    }

    /// Create the wgpu instance and surface from canvas
    #[cfg(target_arch = "wasm32")]
    fn create_surface(
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>), RenderError> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| RenderError::Surface(e.to_string()))?;

        Ok((instance, surface))
    }

    /// Create the wgpu instance and surface from canvas (non-WASM stub)
    #[cfg(not(target_arch = "wasm32"))]
    fn create_surface(
        _canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(wgpu::Instance, wgpu::Surface<'static>), RenderError> {
        Err(RenderError::UnsupportedTarget)
    }

    /// Setup GPU device, queue, surface configuration and scene uniforms
    async fn setup_gpu(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'static>,
        snapshot: &SceneSnapshot,
    ) -> Result<GpuResources, RenderError> {
        let (device, queue, adapter) = create_device(instance, surface).await?;
        let (surface_config, surface_format) =
            configure_surface(surface, &adapter, &device, snapshot.width, snapshot.height)?;
        let (uniform_buffer, scene_layout, scene_bind_group) =
            create_scene_uniforms(&device, &snapshot.uniforms);

        Ok(GpuResources {
            device,
            queue,
            surface_config,
            surface_format,
            scene_layout,
            scene_bind_group,
            uniform_buffer,
        })
    }

    /// Upload both clouds and build the pipeline
    fn setup_clouds(gpu: &GpuResources, snapshot: &SceneSnapshot) -> CloudResources {
        let material_layout = create_material_layout(&gpu.device);
        let pipeline = create_points_pipeline(
            &gpu.device,
            &gpu.scene_layout,
            &material_layout,
            gpu.surface_format,
        );

        CloudResources {
            pipeline,
            star_buffer: create_instance_buffer(&gpu.device, &snapshot.stars, true, "Star Instances"),
            star_material: create_material(
                &gpu.device,
                &material_layout,
                snapshot.star_material,
                "Star Material",
            ),
            star_count: snapshot.stars.len() as u32,
            nebula_buffer: create_instance_buffer(
                &gpu.device,
                &snapshot.nebula,
                false,
                "Nebula Instances",
            ),
            nebula_material: create_material(
                &gpu.device,
                &material_layout,
                snapshot.nebula_material,
                "Nebula Material",
            ),
            nebula_count: snapshot.nebula.len() as u32,
        }
    }

    fn assemble(surface: wgpu::Surface<'static>, gpu: GpuResources, clouds: CloudResources) -> Self {
        Self {
            device: gpu.device,
            queue: gpu.queue,
            surface,
            surface_config: gpu.surface_config,
            scene_bind_group: gpu.scene_bind_group,
            uniform_buffer: gpu.uniform_buffer,
            clouds,
            start_time: js_sys::Date::now(),
        }
    }

    fn build_uniforms(scene: &SceneContext, time: f32, width: u32, height: u32) -> SceneUniforms {
        SceneUniforms::from_camera(
            &scene.camera,
            time,
            width,
            height,
            scene.config.camera.fog_density,
            scene.starfield.rotation_y(),
        )
    }

    /// Resize the drawing buffer (device pixels)
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if self.surface_config.width == width && self.surface_config.height == height {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Upload this frame's stars and camera, then draw both clouds
    pub fn render(&mut self, scene: &SceneContext) -> Result<(), RenderError> {
        let elapsed = ((js_sys::Date::now() - self.start_time) / 1000.0) as f32;

        let uniforms = Self::build_uniforms(
            scene,
            elapsed,
            self.surface_config.width,
            self.surface_config.height,
        );
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
        self.queue
            .write_buffer(&self.clouds.star_buffer, 0, scene.starfield.star_bytes());

        let output = self.get_surface_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Starfield Encoder"),
            });

        // Nebula first so stars add on top of it
        render_clouds(
            &mut encoder,
            &self.clouds.pipeline,
            &self.scene_bind_group,
            &view,
            &[
                CloudDraw {
                    instances: &self.clouds.nebula_buffer,
                    material: &self.clouds.nebula_material,
                    count: self.clouds.nebula_count,
                },
                CloudDraw {
                    instances: &self.clouds.star_buffer,
                    material: &self.clouds.star_material,
                    count: self.clouds.star_count,
                },
            ],
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get surface texture, handling surface errors
    fn get_surface_texture(&mut self) -> Result<wgpu::SurfaceTexture, RenderError> {
        match self.surface.get_current_texture() {
            Ok(texture) => Ok(texture),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                Err(RenderError::SurfaceReconfigured)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => Err(RenderError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => Err(RenderError::Timeout),
        }
    }
}
