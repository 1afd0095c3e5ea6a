//! Integration tests for SceneContext
//!
//! These tests drive the scene the way the page does:
//! - Pointer moves feeding the camera and the trail
//! - Background frames with respawn and pause/resume
//! - Trail decay over many ticks
//! - Resize handling and the contact form

use approx::assert_relative_eq;
use starfolio_scene::{
    ContactForm, SceneConfig, SceneContext, TrailCanvas, Vec2, Vec3,
    page::CONTACT_ACK_MESSAGE,
};

/// Canvas that records what the last tick painted
#[derive(Default)]
struct RecordingCanvas {
    clears: usize,
    painted: Vec<(Vec2, f32, f32)>,
}

impl TrailCanvas for RecordingCanvas {
    fn clear(&mut self) {
        self.clears += 1;
        self.painted.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        assert_eq!(rgb, [0, 255, 136]);
        assert!((0.0..=1.0).contains(&alpha));
        self.painted.push((center, radius, alpha));
    }
}

fn scene() -> SceneContext {
    let mut config = SceneConfig::default();
    config.starfield.star_count = 500;
    config.nebula.count = 20;
    SceneContext::new(config, 1920.0, 1080.0, 2024)
}

// =============================================================================
// Background Field
// =============================================================================

#[test]
fn test_star_count_constant_across_frames() {
    let mut scene = scene();
    for frame in 0..300 {
        scene.tick_background(frame as f64 * 16.7);
        assert_eq!(scene.starfield.star_count(), 500);
    }
}

#[test]
fn test_respawned_star_lands_exactly_on_far_bound() {
    let mut scene = scene();
    scene.starfield.stars_mut()[7].position[2] = 200.5;
    scene.tick_background(0.0);
    assert_eq!(scene.starfield.stars()[7].position[2], -2000.0);
}

#[test]
fn test_no_star_stays_past_near_plane() {
    let mut scene = scene();
    for star in scene.starfield.stars_mut().iter_mut().step_by(3) {
        star.position[2] = 199.98;
    }
    for frame in 0..200 {
        scene.tick_background(frame as f64 * 16.0);
        assert!(scene.starfield.stars().iter().all(|s| s.position[2] <= 200.0));
    }
}

#[test]
fn test_centered_pointer_converges_camera_to_origin() {
    let mut scene = scene();
    scene.camera.position = Vec3::new(0.04, -0.03, 1.0);
    scene.pointer_moved(960.0, 540.0);
    assert_eq!(scene.pointer.normalized, Vec2::ZERO);
    assert_eq!(scene.camera.target_for(scene.pointer.normalized), Vec3::new(0.0, 0.0, 1.0));

    for frame in 0..600 {
        scene.tick_background(frame as f64 * 16.0);
    }
    assert_relative_eq!(scene.camera.position.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(scene.camera.position.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(scene.camera.position.z, 1.0);
}

#[test]
fn test_hidden_page_freezes_background_but_not_trail() {
    let mut scene = scene();
    scene.tick_background(0.0);
    scene.set_hidden(true);

    let frozen = scene.starfield.stars().to_vec();
    let rotation = scene.starfield.rotation_y();
    scene.pointer_moved(100.0, 100.0);
    for frame in 1..10 {
        assert!(scene.tick_background(frame as f64 * 16.0).is_none());
        scene.tick_trail(&mut RecordingCanvas::default());
    }
    assert_eq!(scene.starfield.stars(), &frozen[..]);
    assert_eq!(scene.starfield.rotation_y(), rotation);
    assert_eq!(scene.trail.particles()[0].life, 100.0 - 9.0 * 2.0);

    scene.set_hidden(false);
    assert!(scene.tick_background(500.0).is_some());
}

// =============================================================================
// Cursor Trail
// =============================================================================

#[test]
fn test_ten_moves_fully_decay_after_fifty_ticks() {
    let mut scene = scene();
    for i in 0..10 {
        scene.pointer_moved(100.0 + i as f32 * 5.0, 200.0);
    }
    assert_eq!(scene.trail.len(), 10);

    let mut canvas = RecordingCanvas::default();
    for tick in 1..=49 {
        scene.tick_trail(&mut canvas);
        assert_eq!(scene.trail.len(), 10, "particles expired early at tick {tick}");
    }
    scene.tick_trail(&mut canvas);
    assert!(scene.trail.is_empty());
    assert_eq!(canvas.clears, 50);
    // The final tick still paints each particle once, fully transparent
    assert_eq!(canvas.painted.len(), 10);
    assert!(canvas.painted.iter().all(|&(_, _, alpha)| alpha == 0.0));
}

#[test]
fn test_staggered_particles_expire_independently() {
    let mut scene = scene();
    let mut canvas = RecordingCanvas::default();
    scene.pointer_moved(10.0, 10.0);
    for _ in 0..25 {
        scene.tick_trail(&mut canvas);
    }
    scene.pointer_moved(20.0, 20.0);
    for _ in 0..25 {
        scene.tick_trail(&mut canvas);
    }
    assert_eq!(scene.trail.len(), 1);
    assert_eq!(scene.trail.particles()[0].life, 50.0);
}

#[test]
fn test_trail_cap_from_config() {
    let config = SceneConfig::from_json(
        r#"{ "starfield": { "star_count": 10 }, "nebula": { "count": 1 }, "trail": { "max_particles": 4 } }"#,
    )
    .unwrap();
    let mut scene = SceneContext::new(config, 800.0, 600.0, 5);
    for i in 0..20 {
        scene.pointer_moved(i as f32, 0.0);
    }
    assert_eq!(scene.trail.len(), 4);
    assert_eq!(scene.trail.particles()[0].position, Vec2::new(16.0, 0.0));
}

#[test]
fn test_zero_trail_cap_without_validation() {
    let mut config = SceneConfig::default();
    config.trail.max_particles = Some(0);
    let mut scene = SceneContext::new(config, 800.0, 600.0, 5);
    scene.pointer_moved(1.0, 1.0);
    assert!(scene.trail.is_empty());
}

// =============================================================================
// Viewport
// =============================================================================

#[test]
fn test_resize_twice_is_idempotent() {
    let mut scene = scene();
    assert!(scene.resize(1280.0, 720.0));
    let viewport = scene.viewport;
    let aspect = scene.camera.aspect;

    assert!(!scene.resize(1280.0, 720.0));
    assert_eq!(scene.viewport, viewport);
    assert_eq!(scene.camera.aspect, aspect);
}

// =============================================================================
// Page
// =============================================================================

#[test]
fn test_empty_contact_form_is_acknowledged_and_cleared() {
    let mut form = ContactForm::default();
    let ack = form.submit();
    assert_eq!(ack.message(), CONTACT_ACK_MESSAGE);
    assert!(form.is_empty());
}

#[test]
fn test_navbar_follows_scroll() {
    let mut scene = scene();
    assert_eq!(scene.nav.on_scroll(40.0), None);
    assert_eq!(scene.nav.on_scroll(140.0), Some(true));
    assert_eq!(scene.nav.on_scroll(60.0), Some(false));
}
