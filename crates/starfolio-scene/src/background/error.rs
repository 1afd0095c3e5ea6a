/// Errors from setting up or driving the starfield renderer
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The renderer only runs in the browser.
    #[error("starfield renderer only supports wasm32 targets")]
    UnsupportedTarget,

    /// The canvas could not back a wgpu surface.
    #[error("failed to create surface: {0}")]
    Surface(String),

    /// Neither WebGPU nor WebGL2 produced an adapter.
    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,

    /// The adapter refused to create a device.
    #[error("failed to create device: {0}")]
    Device(String),

    /// The surface was lost or outdated and has been reconfigured.
    #[error("surface reconfigured, frame skipped")]
    SurfaceReconfigured,

    /// The GPU did not hand out a frame in time.
    #[error("GPU timeout, frame skipped")]
    Timeout,

    #[error("out of GPU memory")]
    OutOfMemory,
}

impl RenderError {
    /// Whether the next frame may succeed without intervention
    pub fn is_transient(&self) -> bool {
        matches!(self, RenderError::SurfaceReconfigured | RenderError::Timeout)
    }
}
