//! Boids flocking on a toroidal world.
//!
//! A [`Flock`] owns a fixed population and advances it one frame per
//! [`Flock::tick`]: separation, alignment and cohesion are evaluated against
//! the wrap-around metric, speeds are clamped, positions wrap across edges.
//! Periodic cluster pulses temporarily amplify cohesion.
//!
//! ```
//! use boid_core::{BoidConfig, Bounds, Flock};
//!
//! let bounds = Bounds::new(640.0, 480.0).unwrap();
//! let mut flock = Flock::from_seed(50, bounds, BoidConfig::default(), 7).unwrap();
//! flock.tick(16.0);
//! assert_eq!(flock.snapshot().len(), 50);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod behavior;
pub mod boid;
pub mod cluster;
pub mod config;
pub mod error;
pub mod flock;
pub mod torus;
pub mod vector;

pub use boid::Boid;
pub use cluster::{ClusterScheduler, ClusterState};
pub use config::{BoidConfig, ClusterConfig, DEFAULT_BOID_COUNT};
pub use error::{BoundsError, ConfigError, FlockError};
pub use flock::Flock;
pub use torus::Bounds;
pub use vector::Vector2D;
