//! Scene configuration
//!
//! Every tunable the page animates with lives here. Defaults reproduce the
//! shipped look; a JSON document can override any subset of fields:
//!
//! ```rust
//! use starfolio_scene::SceneConfig;
//!
//! let config = SceneConfig::from_json(r#"{ "trail": { "decay_step": 4.0 } }"#).unwrap();
//! assert_eq!(config.trail.decay_step, 4.0);
//! assert_eq!(config.starfield.star_count, 6000);
//! ```

use serde::{Deserialize, Serialize};

/// Star palette: primary green, secondary blue, tertiary magenta, white
pub const STAR_PALETTE: [[f32; 3]; 4] = [
    [0.0, 1.0, 136.0 / 255.0],
    [0.0, 191.0 / 255.0, 1.0],
    [1.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// Nebula colours, picked with equal probability
pub const NEBULA_GREEN: [f32; 3] = [0.0, 1.0, 0.5];
pub const NEBULA_BLUE: [f32; 3] = [0.0, 0.7, 1.0];

/// Errors from loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A count that must be positive was zero.
    #[error("{field} must be greater than zero")]
    ZeroCount { field: &'static str },

    /// A step, scale or range that must be positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// A ratio outside `[0, 1]`.
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange { field: &'static str, value: f32 },
}

/// Drifting star cloud
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars (constant for the page lifetime)
    pub star_count: usize,
    /// Width/height of the cube stars are scattered in, centred on the axis
    pub star_spread: f32,
    /// Stars start between `-star_depth` and 0 on z
    pub star_depth: f32,
    /// Per-star size is drawn from `[0, star_max_size)`
    pub star_max_size: f32,
    /// Amplitude of the per-frame depth drift
    pub drift_amplitude: f32,
    /// Milliseconds to drift phase
    pub time_scale: f64,
    /// Stars with z above this are sent back to `far_bound`
    pub near_threshold: f32,
    /// Depth a respawned star is placed at
    pub far_bound: f32,
    /// Y rotation added to the star cloud every frame (radians)
    pub rotation_step: f32,
    /// Material point size
    pub material_size: f32,
    /// Material opacity
    pub opacity: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 6000,
            star_spread: 2000.0,
            star_depth: 2000.0,
            star_max_size: 2.0,
            drift_amplitude: 0.05,
            time_scale: 0.0001,
            near_threshold: 200.0,
            far_bound: -2000.0,
            rotation_step: 0.0002,
            material_size: 2.0,
            opacity: 0.8,
        }
    }
}

/// Static nebula haze
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NebulaConfig {
    pub count: usize,
    pub spread: f32,
    pub depth: f32,
    /// Sizes are drawn from `[min_size, min_size + size_range)`
    pub min_size: f32,
    pub size_range: f32,
    pub material_size: f32,
    pub opacity: f32,
}

impl Default for NebulaConfig {
    fn default() -> Self {
        Self {
            count: 200,
            spread: 1500.0,
            depth: 1500.0,
            min_size: 10.0,
            size_range: 20.0,
            material_size: 15.0,
            opacity: 0.1,
        }
    }
}

/// Perspective camera with pointer parallax
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial camera z
    pub start_z: f32,
    /// Normalised pointer offset to world offset
    pub parallax_scale: f32,
    /// Fraction of the remaining gap closed each frame
    pub smoothing: f32,
    /// Exponential-squared fog density
    pub fog_density: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 1.0,
            far: 1000.0,
            start_z: 1.0,
            parallax_scale: 0.05,
            smoothing: 0.05,
            fog_density: 0.0008,
        }
    }
}

/// Cursor trail particles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Lifetime a particle starts with
    pub initial_life: f32,
    /// Lifetime removed per tick
    pub decay_step: f32,
    /// Sizes are drawn from `[size_min, size_min + size_range)`
    pub size_min: f32,
    pub size_range: f32,
    /// Each velocity component is drawn from `[-speed_range / 2, speed_range / 2)`
    pub speed_range: f32,
    /// Size removed per tick while above `size_floor`
    pub shrink_step: f32,
    pub size_floor: f32,
    /// RGB fill colour
    pub color: [u8; 3],
    /// Optional cap on live particles; `None` keeps the trail unbounded
    pub max_particles: Option<usize>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            initial_life: 100.0,
            decay_step: 2.0,
            size_min: 1.0,
            size_range: 3.0,
            speed_range: 3.0,
            shrink_step: 0.05,
            size_floor: 0.1,
            color: [0, 255, 136],
            max_particles: None,
        }
    }
}

/// Page widget timings and thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Navbar gets the `scrolled` class past this offset
    pub scroll_threshold: f64,
    /// Visible fraction that reveals a content block
    pub reveal_threshold: f64,
    /// Bottom root margin for the reveal observer (negative shrinks the viewport)
    pub reveal_root_margin_bottom: i32,
    /// Distance hidden blocks sit below their final position
    pub reveal_offset_px: f32,
    /// Reveal transition duration in seconds
    pub reveal_transition_s: f32,
    /// Visible fraction that fills a skill bar
    pub skill_threshold: f64,
    /// Delay after load before the subtitle starts typing
    pub typing_delay_ms: f64,
    /// Time per typed character
    pub typing_speed_ms: f64,
    /// Delay before the body fades in after load
    pub fade_in_delay_ms: i32,
    /// Half the cursor glow size
    pub cursor_glow_radius: f32,
    /// Glow scale while hovering interactive elements
    pub cursor_hover_scale: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 100.0,
            reveal_threshold: 0.1,
            reveal_root_margin_bottom: -100,
            reveal_offset_px: 50.0,
            reveal_transition_s: 0.6,
            skill_threshold: 0.5,
            typing_delay_ms: 1000.0,
            typing_speed_ms: 50.0,
            fade_in_delay_ms: 100,
            cursor_glow_radius: 10.0,
            cursor_hover_scale: 3.0,
        }
    }
}

/// Complete scene configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub starfield: StarfieldConfig,
    pub nebula: NebulaConfig,
    pub camera: CameraConfig,
    pub trail: TrailConfig,
    pub page: PageConfig,
}

impl SceneConfig {
    /// Parse a (partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starfield.star_count == 0 {
            return Err(ConfigError::ZeroCount { field: "starfield.star_count" });
        }
        positive("starfield.star_spread", self.starfield.star_spread)?;
        positive("starfield.star_depth", self.starfield.star_depth)?;
        positive("nebula.spread", self.nebula.spread)?;
        positive("nebula.depth", self.nebula.depth)?;
        positive("camera.fov_y_degrees", self.camera.fov_y_degrees)?;
        positive("camera.near", self.camera.near)?;
        if self.camera.far <= self.camera.near {
            return Err(ConfigError::NonPositive {
                field: "camera.far - camera.near",
                value: self.camera.far - self.camera.near,
            });
        }
        unit("camera.smoothing", self.camera.smoothing)?;
        positive("trail.initial_life", self.trail.initial_life)?;
        positive("trail.decay_step", self.trail.decay_step)?;
        if self.trail.max_particles == Some(0) {
            return Err(ConfigError::ZeroCount { field: "trail.max_particles" });
        }
        positive("page.typing_speed_ms", self.page.typing_speed_ms as f32)?;
        unit("page.reveal_threshold", self.page.reveal_threshold as f32)?;
        unit("page.skill_threshold", self.page.skill_threshold as f32)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(
            r#"{ "starfield": { "star_count": 500 }, "trail": { "max_particles": 300 } }"#,
        )
        .unwrap();
        assert_eq!(config.starfield.star_count, 500);
        assert_eq!(config.starfield.far_bound, -2000.0);
        assert_eq!(config.trail.max_particles, Some(300));
        assert_eq!(config.trail.initial_life, 100.0);
        assert_eq!(config.nebula, NebulaConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SceneConfig::from_json("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_bad_json_is_rejected() {
        let err = SceneConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_zero_decay_is_rejected() {
        let err = SceneConfig::from_json(r#"{ "trail": { "decay_step": 0.0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { field: "trail.decay_step", .. }));
    }

    #[test]
    fn test_zero_star_count_is_rejected() {
        let mut config = SceneConfig::default();
        config.starfield.star_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCount { field: "starfield.star_count" })
        ));
    }

    #[test]
    fn test_smoothing_out_of_range() {
        let mut config = SceneConfig::default();
        config.camera.smoothing = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfUnitRange { field: "camera.smoothing", .. })
        ));
    }

    #[test]
    fn test_palette_is_normalised() {
        for color in STAR_PALETTE.iter().chain([NEBULA_GREEN, NEBULA_BLUE].iter()) {
            assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
