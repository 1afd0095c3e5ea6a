//! Starfield background model
//!
//! Two point clouds share one record layout:
//! - **Stars**: allocated once, depth drifts every frame and wraps from the
//!   near threshold back to the far bound (a fly-through loop)
//! - **Nebula**: a sparse cloud of large faint points, never touched after
//!   creation
//!
//! The buffers are laid out exactly as the GPU renderer uploads them.

use rand::Rng;

use crate::config::{NebulaConfig, StarfieldConfig, NEBULA_BLUE, NEBULA_GREEN, STAR_PALETTE};

/// One point of either cloud, in GPU instance layout
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3], // offset 0
    pub color: [f32; 3],    // offset 12
    pub size: f32,          // offset 24
}

/// Star and nebula point buffers
#[derive(Clone, Debug)]
pub struct StarField {
    stars: Vec<PointInstance>,
    nebula: Vec<PointInstance>,
    rotation_y: f32,
    drift_amplitude: f32,
    time_scale: f64,
    near_threshold: f32,
    far_bound: f32,
    rotation_step: f32,
}

impl StarField {
    /// Scatter both clouds inside their bounding volumes
    pub fn new<R: Rng>(
        stars: &StarfieldConfig,
        nebula: &NebulaConfig,
        rng: &mut R,
    ) -> Self {
        let star_points = (0..stars.star_count)
            .map(|_| PointInstance {
                position: scatter(rng, stars.star_spread, stars.star_depth),
                color: STAR_PALETTE[rng.gen_range(0..STAR_PALETTE.len())],
                size: rng.gen::<f32>() * stars.star_max_size,
            })
            .collect();

        let nebula_points = (0..nebula.count)
            .map(|_| PointInstance {
                position: scatter(rng, nebula.spread, nebula.depth),
                color: if rng.gen_bool(0.5) { NEBULA_GREEN } else { NEBULA_BLUE },
                size: rng.gen::<f32>() * nebula.size_range + nebula.min_size,
            })
            .collect();

        Self {
            stars: star_points,
            nebula: nebula_points,
            rotation_y: 0.0,
            drift_amplitude: stars.drift_amplitude,
            time_scale: stars.time_scale,
            near_threshold: stars.near_threshold,
            far_bound: stars.far_bound,
            rotation_step: stars.rotation_step,
        }
    }

    /// Advance one frame
    ///
    /// Star `i` drifts by `sin(t + 3i) * amplitude` on z, where `t` is the
    /// scaled elapsed time. Any star past the near threshold is placed at the
    /// far bound. The cloud also turns by one rotation step.
    pub fn update(&mut self, elapsed_ms: f64) {
        let t = elapsed_ms * self.time_scale;
        for (i, star) in self.stars.iter_mut().enumerate() {
            let phase = t + (i * 3) as f64;
            star.position[2] += phase.sin() as f32 * self.drift_amplitude;
            if star.position[2] > self.near_threshold {
                star.position[2] = self.far_bound;
            }
        }
        self.rotation_y += self.rotation_step;
    }

    /// Star buffer (mutated every frame)
    pub fn stars(&self) -> &[PointInstance] {
        &self.stars
    }

    /// Nebula buffer (static)
    pub fn nebula(&self) -> &[PointInstance] {
        &self.nebula
    }

    /// Mutable star access, for placing stars in tests and demos
    pub fn stars_mut(&mut self) -> &mut [PointInstance] {
        &mut self.stars
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn nebula_count(&self) -> usize {
        self.nebula.len()
    }

    /// Accumulated y rotation of the star cloud (radians)
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Raw bytes of the star buffer for upload
    pub fn star_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.stars)
    }

    /// Raw bytes of the nebula buffer for upload
    pub fn nebula_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.nebula)
    }
}

/// Uniform position in a `spread`-wide square column reaching `depth` into -z
fn scatter<R: Rng>(rng: &mut R, spread: f32, depth: f32) -> [f32; 3] {
    [
        (rng.gen::<f32>() - 0.5) * spread,
        (rng.gen::<f32>() - 0.5) * spread,
        -rng.gen::<f32>() * depth,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> StarField {
        let mut rng = StdRng::seed_from_u64(42);
        StarField::new(&StarfieldConfig::default(), &NebulaConfig::default(), &mut rng)
    }

    #[test]
    fn test_counts_match_config() {
        let f = field();
        assert_eq!(f.star_count(), 6000);
        assert_eq!(f.nebula_count(), 200);
    }

    #[test]
    fn test_stars_within_bounds() {
        let f = field();
        for s in f.stars() {
            assert!(s.position[0] >= -1000.0 && s.position[0] < 1000.0);
            assert!(s.position[1] >= -1000.0 && s.position[1] < 1000.0);
            assert!(s.position[2] > -2000.0 && s.position[2] <= 0.0);
            assert!(s.size >= 0.0 && s.size < 2.0);
            assert!(STAR_PALETTE.contains(&s.color));
        }
    }

    #[test]
    fn test_nebula_within_bounds() {
        let f = field();
        for p in f.nebula() {
            assert!(p.position[0] >= -750.0 && p.position[0] < 750.0);
            assert!(p.position[2] > -1500.0 && p.position[2] <= 0.0);
            assert!(p.size >= 10.0 && p.size < 30.0);
            assert!(p.color == NEBULA_GREEN || p.color == NEBULA_BLUE);
        }
    }

    #[test]
    fn test_update_keeps_count() {
        let mut f = field();
        for frame in 0..120 {
            f.update(frame as f64 * 16.0);
            assert_eq!(f.star_count(), 6000);
        }
    }

    #[test]
    fn test_star_past_near_plane_respawns_at_far_bound() {
        let mut f = field();
        f.stars_mut()[0].position[2] = 250.0;
        f.stars_mut()[1].position[2] = 199.99;
        f.update(0.0);
        assert_eq!(f.stars()[0].position[2], -2000.0);
        // sin(3) * 0.05 ≈ 0.007 keeps star 1 under the threshold
        assert!(f.stars()[1].position[2] <= 200.0);
    }

    #[test]
    fn test_drift_follows_phase() {
        let mut f = field();
        let before: Vec<f32> = f.stars().iter().take(4).map(|s| s.position[2]).collect();
        f.update(0.0);
        for (i, z0) in before.iter().enumerate() {
            let expected = z0 + ((i * 3) as f64).sin() as f32 * 0.05;
            assert!((f.stars()[i].position[2] - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_nebula_never_changes() {
        let mut f = field();
        let before = f.nebula().to_vec();
        for frame in 0..10 {
            f.update(frame as f64 * 1000.0);
        }
        assert_eq!(f.nebula(), &before[..]);
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut f = field();
        f.update(0.0);
        f.update(16.0);
        assert!((f.rotation_y() - 0.0004).abs() < 1e-7);
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<PointInstance>(), 28);
        let f = field();
        assert_eq!(f.star_bytes().len(), 6000 * 28);
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(field().stars(), field().stars());
    }
}
