use thiserror::Error;

/// Rejected world dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("world width {0} must be positive and finite")]
    InvalidWidth(f32),
    #[error("world height {0} must be positive and finite")]
    InvalidHeight(f32),
}

/// Rejected simulation tunables.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("min_speed {min} exceeds max_speed {max}")]
    SpeedRange { min: f32, max: f32 },
    #[error("cluster interval_min_ms {min} exceeds interval_max_ms {max}")]
    IntervalRange { min: f64, max: f64 },
    #[error("cluster {field} must be finite and non-negative (got {value})")]
    InvalidTiming { field: &'static str, value: f64 },
}

/// Errors raised when constructing a flock.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FlockError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
