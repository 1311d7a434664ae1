use crate::error::ConfigError;

/// Number of boids a flock is seeded with when nothing else is requested.
pub const DEFAULT_BOID_COUNT: usize = 50;

/// Timing of the periodic cohesion bursts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterConfig {
    /// When false no pulse is ever scheduled.
    pub enabled: bool,
    pub interval_min_ms: f64,
    pub interval_max_ms: f64,
    pub duration_ms: f64,
    /// Factor applied to the cohesion weight while a pulse is active.
    pub cohesion_multiplier: f32,
}

impl Default for ClusterConfig {
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

impl ClusterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("interval_min_ms", self.interval_min_ms),
            ("interval_max_ms", self.interval_max_ms),
            ("duration_ms", self.duration_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTiming { field, value });
            }
        }
        if self.interval_min_ms > self.interval_max_ms {
            return Err(ConfigError::IntervalRange {
                min: self.interval_min_ms,
                max: self.interval_max_ms,
            });
        }
        check_non_negative("cohesion_multiplier", self.cohesion_multiplier)
    }
}

/// Configuration for the boid simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidConfig {
    pub max_speed: f32,
    pub min_speed: f32,
    pub separation_distance: f32,
    pub alignment_distance: f32,
    pub cohesion_distance: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub cluster: ClusterConfig,
}

impl Default for BoidConfig {
    fn default() -> Self {
        Self {
            max_speed: 1.8,
            min_speed: 0.6,
            separation_distance: 28.0,
            alignment_distance: 60.0,
            cohesion_distance: 80.0,
            separation_weight: 0.05,
            alignment_weight: 0.04,
            cohesion_weight: 0.008,
            cluster: ClusterConfig::default(),
        }
    }
}

impl BoidConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("max_speed", self.max_speed),
            ("min_speed", self.min_speed),
            ("separation_distance", self.separation_distance),
            ("alignment_distance", self.alignment_distance),
            ("cohesion_distance", self.cohesion_distance),
            ("separation_weight", self.separation_weight),
            ("alignment_weight", self.alignment_weight),
            ("cohesion_weight", self.cohesion_weight),
        ] {
            check_non_negative(field, value)?;
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        self.cluster.validate()
    }

    /// Cohesion weight in effect, amplified while a cluster pulse runs.
    pub fn effective_cohesion_weight(&self, cluster_active: bool) -> f32 {
        if cluster_active {
            self.cohesion_weight * self.cluster.cohesion_multiplier
        } else {
            self.cohesion_weight
        }
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        Err(ConfigError::NonFinite { field })
    } else if value < 0.0 {
        Err(ConfigError::Negative { field, value })
    } else {
        Ok(())
    }
}
