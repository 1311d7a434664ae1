use rand::Rng;

use crate::config::BoidConfig;
use crate::torus::Bounds;
use crate::vector::Vector2D;

/// A single boid entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self { position, velocity }
    }

    /// Uniform position inside `bounds`, random heading, speed in `[min_speed, max_speed]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: &Bounds, config: &BoidConfig) -> Self {
        let position = Vector2D::new(
            rng.gen_range(0.0..bounds.width()),
            rng.gen_range(0.0..bounds.height()),
        );
        let speed = rng.gen_range(config.min_speed..=config.max_speed);
        Self::new(position, Vector2D::random_heading(rng, speed))
    }

    /// Adds `steering` to the velocity, clamps speed (ceiling first, then
    /// floor) and moves one step, wrapping across the world edges.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        steering: Vector2D,
        config: &BoidConfig,
        bounds: &Bounds,
        rng: &mut R,
    ) {
        self.velocity += steering;
        self.velocity = self
            .velocity
            .limit(config.max_speed)
            .ensure_min_speed(config.min_speed, rng);
        self.position = bounds.wrap(self.position + self.velocity);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }
}
