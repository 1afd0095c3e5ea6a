//! Scene context coordinating both animated layers

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::camera::ParallaxCamera;
use crate::config::SceneConfig;
use crate::frame_loop::{FrameLoop, FrameTick};
use crate::math::Vec2;
use crate::page::{CursorGlow, NavState, ScrollThrottle};
use crate::pointer::PointerState;
use crate::starfield::StarField;
use crate::trail::{TrailCanvas, TrailEmitter};
use crate::viewport::Viewport;

/// Everything the page animates, owned in one place
///
/// The web layer holds one of these behind `Rc<RefCell<_>>` and calls into
/// it from event listeners and animation-frame callbacks:
/// - Starfield and camera advance in [`tick_background`](Self::tick_background)
/// - Trail particles spawn in [`pointer_moved`](Self::pointer_moved) and
///   advance in [`tick_trail`](Self::tick_trail)
/// - Only the background loop pauses with page visibility
pub struct SceneContext {
    pub config: SceneConfig,
    pub viewport: Viewport,
    pub pointer: PointerState,
    pub camera: ParallaxCamera,
    pub starfield: StarField,
    pub trail: TrailEmitter,
    pub background_loop: FrameLoop,
    pub nav: NavState,
    pub cursor: CursorGlow,
    pub scroll: ScrollThrottle,
    rng: SmallRng,
}

impl SceneContext {
    /// Create a scene with a fixed RNG seed
    pub fn new(config: SceneConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, SmallRng::seed_from_u64(seed))
    }

    /// Create a scene seeded from the platform entropy source
    pub fn from_entropy(config: SceneConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, SmallRng::from_entropy())
    }

    fn with_rng(config: SceneConfig, width: f32, height: f32, mut rng: SmallRng) -> Self {
        let viewport = Viewport::new(width, height);
        let starfield = StarField::new(&config.starfield, &config.nebula, &mut rng);
        Self {
            camera: ParallaxCamera::new(&config.camera, viewport.aspect()),
            trail: TrailEmitter::new(config.trail.clone()),
            nav: NavState::new(config.page.scroll_threshold),
            cursor: CursorGlow::new(&config.page),
            scroll: ScrollThrottle::default(),
            pointer: PointerState::default(),
            background_loop: FrameLoop::new(),
            starfield,
            viewport,
            config,
            rng,
        }
    }

    /// Pointer moved to client `(x, y)`: track it, move the glow, emit a particle
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.moved(x, y, self.viewport.size);
        self.cursor.follow(x, y);
        self.trail.spawn(Vec2::new(x, y), &mut self.rng);
    }

    /// Viewport resized; returns false when the size is unchanged
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !self.viewport.resize(width, height) {
            return false;
        }
        self.camera.set_aspect(self.viewport.aspect());
        self.pointer.renormalize(self.viewport.size);
        true
    }

    /// Advance the starfield and camera, unless the background is paused
    pub fn tick_background(&mut self, now_ms: f64) -> Option<FrameTick> {
        let tick = self.background_loop.begin_frame(now_ms)?;
        self.starfield.update(tick.elapsed_ms);
        self.camera.ease_toward(self.pointer.normalized);
        Some(tick)
    }

    /// Advance and paint the cursor trail
    pub fn tick_trail<C: TrailCanvas + ?Sized>(&mut self, canvas: &mut C) {
        self.trail.tick(canvas);
    }

    /// Page visibility changed
    pub fn set_hidden(&mut self, hidden: bool) {
        self.background_loop.on_visibility_change(hidden);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.starfield.star_count = 64;
        config.nebula.count = 8;
        config
    }

    #[test]
    fn test_pointer_spawns_particle_and_moves_glow() {
        let mut scene = SceneContext::new(small_config(), 800.0, 600.0, 1);
        scene.pointer_moved(200.0, 150.0);
        assert_eq!(scene.trail.len(), 1);
        assert_eq!(scene.pointer.normalized, Vec2::new(-0.5, -0.5));
        assert_eq!(scene.cursor.top_left(), Vec2::new(190.0, 140.0));
    }

    #[test]
    fn test_hidden_scene_skips_background() {
        let mut scene = SceneContext::new(small_config(), 800.0, 600.0, 1);
        let before = scene.starfield.stars().to_vec();
        scene.set_hidden(true);
        assert!(scene.tick_background(16.0).is_none());
        assert_eq!(scene.starfield.stars(), &before[..]);
        scene.set_hidden(false);
        assert!(scene.tick_background(32.0).is_some());
    }

    #[test]
    fn test_resize_updates_camera_aspect() {
        let mut scene = SceneContext::new(small_config(), 800.0, 600.0, 1);
        assert!(scene.resize(1000.0, 500.0));
        assert!((scene.camera.aspect - 2.0).abs() < 1e-6);
        assert!(!scene.resize(1000.0, 500.0));
    }
}
