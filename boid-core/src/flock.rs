use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::behavior;
use crate::boid::Boid;
use crate::cluster::{ClusterScheduler, ClusterState};
use crate::config::BoidConfig;
use crate::error::{BoundsError, FlockError};
use crate::torus::Bounds;
use crate::vector::Vector2D;

/// A fixed-size population of boids on a toroidal world.
///
/// Drive it with one [`Flock::tick`] per frame and read [`Flock::snapshot`]
/// in between. All randomness (spawning, stalled-boid headings, pulse
/// timing) comes from the injected `R`.
#[derive(Debug, Clone)]
pub struct Flock<R = SmallRng> {
    boids: Vec<Boid>,
    config: BoidConfig,
    bounds: Bounds,
    cluster: ClusterState,
    scheduler: ClusterScheduler,
    rng: R,
    ticks: u64,
    // Reused between ticks.
    steering: Vec<Vector2D>,
}

impl<R: Rng> Flock<R> {
    /// Seeds `count` random boids. A count of zero yields an empty, inert flock.
    pub fn new(count: usize, bounds: Bounds, config: BoidConfig, mut rng: R) -> Result<Self, FlockError> {
        config.validate()?;

        let boids = (0..count)
            .map(|_| Boid::random(&mut rng, &bounds, &config))
            .collect();

        log::info!(
            "Created flock of {} boids in {}x{} world",
            count,
            bounds.width(),
            bounds.height()
        );

        Ok(Self::assemble(boids, bounds, config, rng))
    }

    /// Builds a flock from explicit boids. Positions outside `bounds` are wrapped in.
    pub fn from_boids(
        boids: Vec<Boid>,
        bounds: Bounds,
        config: BoidConfig,
        rng: R,
    ) -> Result<Self, FlockError> {
        config.validate()?;
        let boids = boids
            .into_iter()
            .map(|b| Boid::new(bounds.wrap(b.position), b.velocity))
            .collect();
        Ok(Self::assemble(boids, bounds, config, rng))
    }

    fn assemble(boids: Vec<Boid>, bounds: Bounds, config: BoidConfig, rng: R) -> Self {
        let capacity = boids.len();
        Self {
            boids,
            config,
            bounds,
            cluster: ClusterState::default(),
            scheduler: ClusterScheduler::new(),
            rng,
            ticks: 0,
            steering: Vec::with_capacity(capacity),
        }
    }

    /// Advances the simulation by one frame at timestamp `now` (milliseconds).
    ///
    /// Steering for every boid is computed from the population as it stood
    /// when the tick began; only then are velocities and positions updated.
    pub fn tick(&mut self, now: f64) {
        if self
            .scheduler
            .poll(now, &self.config.cluster, &mut self.cluster, &mut self.rng)
        {
            log::debug!(
                "Cluster pulse {} started at {:.0}ms, ends at {:.0}ms",
                self.scheduler.pulses(),
                now,
                self.cluster.end_time
            );
        }
        if self.cluster.expire(now) {
            log::debug!("Cluster pulse ended at {:.0}ms", now);
        }

        let cluster_active = self.cluster.active;
        self.steering.clear();
        for index in 0..self.boids.len() {
            let force = behavior::steering(
                index,
                &self.boids,
                &self.bounds,
                &self.config,
                cluster_active,
            );
            self.steering.push(force);
        }

        for (boid, force) in self.boids.iter_mut().zip(self.steering.iter()) {
            boid.update(*force, &self.config, &self.bounds, &mut self.rng);
        }
        self.ticks += 1;
    }

    /// Starts a cluster pulse right away, independent of the pending wait.
    pub fn trigger_cluster(&mut self, now: f64) {
        self.scheduler
            .trigger(now, &self.config.cluster, &mut self.cluster);
        log::debug!("Cluster pulse forced at {:.0}ms", now);
    }

    /// Changes the world size for subsequent ticks. Boids are not moved; a
    /// rejected size leaves the previous bounds in place.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<(), BoundsError> {
        self.bounds = Bounds::new(width, height)?;
        log::info!("Resized flock world to {}x{}", width, height);
        Ok(())
    }

    /// Replaces the tunables; an invalid config leaves the current one in place.
    pub fn set_config(&mut self, config: BoidConfig) -> Result<(), FlockError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Read-only view of the population after the last tick.
    pub fn snapshot(&self) -> &[Boid] {
        &self.boids
    }

    /// Index pairs `(i, j)` with `i < j` whose toroidal distance is below
    /// `radius`, including pairs that are only close across a world edge.
    pub fn neighbor_pairs(&self, radius: f32) -> impl Iterator<Item = (usize, usize)> + '_ {
        let boids = &self.boids;
        let bounds = self.bounds;
        (0..boids.len()).flat_map(move |i| {
            (i + 1..boids.len()).filter_map(move |j| {
                let distance = bounds.shortest_distance(boids[i].position, boids[j].position);
                (distance < radius).then_some((i, j))
            })
        })
    }

    /// Neighbour pairs that can be joined by a straight on-screen line: both
    /// raw axis offsets must also be below `radius`, so pairs adjacent only
    /// through a seam are skipped.
    pub fn connection_pairs(&self, radius: f32) -> impl Iterator<Item = (usize, usize)> + '_ {
        let boids = &self.boids;
        self.neighbor_pairs(radius).filter(move |&(i, j)| {
            let offset = boids[j].position - boids[i].position;
            within(offset.x, radius) && within(offset.y, radius)
        })
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &BoidConfig {
        &self.config
    }

    pub fn cluster(&self) -> ClusterState {
        self.cluster
    }

    pub fn cluster_active(&self) -> bool {
        self.cluster.active
    }

    pub fn scheduler(&self) -> &ClusterScheduler {
        &self.scheduler
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

fn within(offset: f32, radius: f32) -> bool {
    -radius < offset && offset < radius
}

impl Flock<SmallRng> {
    /// Reproducible flock driven by a `SmallRng` seeded with `seed`.
    pub fn from_seed(
        count: usize,
        bounds: Bounds,
        config: BoidConfig,
        seed: u64,
    ) -> Result<Self, FlockError> {
        Self::new(count, bounds, config, SmallRng::seed_from_u64(seed))
    }

    #[cfg(feature = "std")]
    pub fn from_entropy(count: usize, bounds: Bounds, config: BoidConfig) -> Result<Self, FlockError> {
        Self::new(count, bounds, config, SmallRng::from_entropy())
    }
}
