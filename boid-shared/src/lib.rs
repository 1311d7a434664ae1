#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use boid_core::Boid;
use serde::{Deserialize, Serialize};

/// Represents a 2D position in world coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One boid as handed to a renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidSample {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl BoidSample {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Heading in radians, for orienting sprites.
    pub fn heading(&self) -> f32 {
        libm::atan2f(self.vy, self.vx)
    }
}

impl From<&Boid> for BoidSample {
    fn from(boid: &Boid) -> Self {
        Self {
            x: boid.position.x,
            y: boid.position.y,
            vx: boid.velocity.x,
            vy: boid.velocity.y,
        }
    }
}

/// Population state after one tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub time_ms: f64,
    pub cluster_active: bool,
    pub boids: Vec<BoidSample>,
}

impl FrameSnapshot {
    pub fn new(frame: u64, time_ms: f64, cluster_active: bool, boids: &[Boid]) -> Self {
        Self {
            frame,
            time_ms,
            cluster_active,
            boids: boids.iter().map(BoidSample::from).collect(),
        }
    }
}

/// Cluster pulse timing as read from a settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClusterSettings {
    pub enabled: bool,
    pub interval_min_ms: f64,
    pub interval_max_ms: f64,
    pub duration_ms: f64,
    pub cohesion_multiplier: f32,
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_min_ms: 4000.0,
            interval_max_ms: 8000.0,
            duration_ms: 1800.0,
            cohesion_multiplier: 6.0,
        }
    }
}

/// Boid simulation configuration. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationSettings {
    pub boid_count: usize,
    pub width: f32,
    pub height: f32,
    /// Fixed seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub max_speed: f32,
    pub min_speed: f32,
    pub separation_distance: f32,
    pub alignment_distance: f32,
    pub cohesion_distance: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub cluster: ClusterSettings,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            boid_count: 50,
            width: 800.0,
            height: 600.0,
            seed: None,
            max_speed: 1.8,
            min_speed: 0.6,
            separation_distance: 28.0,
            alignment_distance: 60.0,
            cohesion_distance: 80.0,
            separation_weight: 0.05,
            alignment_weight: 0.04,
            cohesion_weight: 0.008,
            cluster: ClusterSettings::default(),
        }
    }
}

/// Totals reported at the end of a headless run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub boid_count: usize,
    pub pulses: u64,
    pub simulated_ms: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let json = r#"{ "boid_count": 120, "seed": 9, "cluster": { "duration_ms": 500.0 } }"#;
        let settings: SimulationSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.boid_count, 120);
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.width, 800.0);
        assert_eq!(settings.cluster.duration_ms, 500.0);
        assert_eq!(settings.cluster.interval_max_ms, 8000.0);
        assert!(settings.cluster.enabled);
    }

    #[test]
    fn test_snapshot_serializes_flat_samples() {
        let snapshot = FrameSnapshot {
            frame: 3,
            time_ms: 50.0,
            cluster_active: true,
            boids: alloc::vec![BoidSample {
                x: 1.0,
                y: 2.0,
                vx: 0.5,
                vy: -0.5
            }],
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["boids"][0]["vx"], 0.5);
        assert_eq!(value["cluster_active"], true);

        let back: FrameSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_from_boids_keeps_order() {
        use boid_core::Vector2D;

        let boids = [
            Boid::new(Vector2D::new(1.0, 2.0), Vector2D::new(0.5, -0.5)),
            Boid::new(Vector2D::new(3.0, 4.0), Vector2D::new(-1.0, 0.0)),
        ];
        let snapshot = FrameSnapshot::new(7, 112.0, false, &boids);

        assert_eq!(snapshot.frame, 7);
        assert_eq!(snapshot.time_ms, 112.0);
        assert!(!snapshot.cluster_active);
        assert_eq!(
            snapshot.boids,
            alloc::vec![
                BoidSample {
                    x: 1.0,
                    y: 2.0,
                    vx: 0.5,
                    vy: -0.5
                },
                BoidSample {
                    x: 3.0,
                    y: 4.0,
                    vx: -1.0,
                    vy: 0.0
                },
            ]
        );
    }

    #[test]
    fn test_heading() {
        let sample = BoidSample {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 1.0,
        };
        assert!((sample.heading() - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(sample.position(), Position::new(0.0, 0.0));
    }
}
