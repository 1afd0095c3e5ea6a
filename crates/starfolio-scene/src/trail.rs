//! Cursor trail emitter
//!
//! Every pointer move appends one short-lived particle. Each tick moves,
//! fades and shrinks every live particle, paints it, then drops the ones
//! whose lifetime ran out. Survivors keep their relative order.
//!
//! Drawing goes through [`TrailCanvas`] so the emitter runs the same against
//! a browser 2D context and a recording canvas in tests.

use rand::Rng;

use crate::config::TrailConfig;
use crate::math::Vec2;

/// Drawing surface the trail paints on each tick
pub trait TrailCanvas {
    /// Erase the whole surface
    fn clear(&mut self);

    /// Fill a circle with `rgb` at opacity `alpha` (`0.0..=1.0`)
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
}

/// One trail particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailParticle {
    pub position: Vec2,
    /// Fixed at spawn
    pub velocity: Vec2,
    pub size: f32,
    /// Remaining lifetime; the particle is removed once this is `<= 0`
    pub life: f32,
}

impl TrailParticle {
    /// Whether the particle is still live
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Advance one particle by a tick
pub fn update_particle(particle: &mut TrailParticle, config: &TrailConfig) {
    particle.position += particle.velocity;
    particle.life -= config.decay_step;
    if particle.size > config.size_floor {
        particle.size -= config.shrink_step;
    }
}

/// Paint one particle, faded by its remaining lifetime
pub fn draw_particle<C: TrailCanvas + ?Sized>(
    particle: &TrailParticle,
    config: &TrailConfig,
    canvas: &mut C,
) {
    let alpha = (particle.life / config.initial_life).clamp(0.0, 1.0);
    canvas.fill_circle(particle.position, particle.size.max(0.0), config.color, alpha);
}

/// Ordered collection of live trail particles
#[derive(Clone, Debug, Default)]
pub struct TrailEmitter {
    particles: Vec<TrailParticle>,
    config: TrailConfig,
}

impl TrailEmitter {
    /// Create an empty emitter
    pub fn new(config: TrailConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
        }
    }

    /// Append a particle at `position` with random size and velocity
    ///
    /// With `max_particles` set, the oldest particles make room first.
    pub fn spawn<R: Rng>(&mut self, position: Vec2, rng: &mut R) {
        let half_speed = self.config.speed_range / 2.0;
        let particle = TrailParticle {
            position,
            velocity: Vec2::new(
                rng.gen::<f32>() * self.config.speed_range - half_speed,
                rng.gen::<f32>() * self.config.speed_range - half_speed,
            ),
            size: rng.gen::<f32>() * self.config.size_range + self.config.size_min,
            life: self.config.initial_life,
        };
        self.push(particle);
    }

    /// Append an already-built particle
    pub fn push(&mut self, particle: TrailParticle) {
        if let Some(max) = self.config.max_particles {
            // A zero cap keeps the trail empty
            if max == 0 {
                return;
            }
            if self.particles.len() >= max {
                let excess = self.particles.len() + 1 - max;
                self.particles.drain(..excess);
            }
        }
        self.particles.push(particle);
    }

    /// Clear the canvas, then update, draw and expire every particle
    pub fn tick<C: TrailCanvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear();
        for particle in &mut self.particles {
            update_particle(particle, &self.config);
            draw_particle(particle, &self.config, canvas);
        }
        self.particles.retain(TrailParticle::is_alive);
    }

    /// Live particles, oldest first
    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

}
