//! Scene core for the Starfolio portfolio site
//!
//! This crate holds everything the page animates, as plain Rust state:
//! - Starfield background (drifting stars plus a static nebula cloud)
//! - Parallax camera that eases toward the pointer
//! - Cursor trail particles spawned on pointer movement
//! - Page widgets (navbar, reveal-on-scroll, typing effect, contact form)
//! - Frame loop control for pausing the background while the tab is hidden
//!
//! ## Architecture
//!
//! - [`math`]: Small geometry types (`Vec2`, `Vec3`, `Size`)
//! - [`config`]: Tunables with serde defaults, overridable from JSON
//! - [`starfield`]: Star and nebula point buffers and per-frame drift
//! - [`camera`]: Parallax camera and view/projection matrices
//! - [`trail`]: Cursor trail emitter and the `TrailCanvas` drawing seam
//! - [`page`]: DOM-independent state behind the page glue
//! - [`frame_loop`]: Start/stop control for a host-driven render loop
//! - [`scene`]: `SceneContext`, the object the web layer drives
//!
//! ## Example
//!
//! ```rust
//! use starfolio_scene::{SceneConfig, SceneContext};
//!
//! let mut scene = SceneContext::new(SceneConfig::default(), 1920.0, 1080.0, 7);
//! scene.pointer_moved(960.0, 540.0);
//! let tick = scene.tick_background(16.0);
//! assert!(tick.is_some());
//! assert_eq!(scene.trail.len(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Time Abstraction**: Callers pass `now_ms`, so animations are deterministic
//! 3. **Seeded Randomness**: Every random draw goes through a caller-visible RNG

pub mod camera;
pub mod config;
pub mod frame_loop;
pub mod math;
pub mod page;
pub mod scene;
pub mod starfield;
pub mod trail;

mod pointer;
mod viewport;

// GPU renderer (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod background;

pub use camera::ParallaxCamera;
pub use config::{
    CameraConfig, ConfigError, NebulaConfig, PageConfig, SceneConfig, StarfieldConfig,
    TrailConfig,
};
pub use frame_loop::{FrameLoop, FrameTick};
pub use math::{Size, Vec2, Vec3};
pub use page::{
    Acknowledgement, ContactForm, CursorGlow, NavState, RevealStyle, ScrollThrottle, SkillBar,
    Submission, Typewriter,
};
pub use pointer::PointerState;
pub use scene::SceneContext;
pub use starfield::{PointInstance, StarField};
pub use trail::{TrailCanvas, TrailEmitter, TrailParticle};
pub use viewport::Viewport;
