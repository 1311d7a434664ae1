//! Distances and wrapping on a rectangular world whose opposite edges meet.

use crate::error::BoundsError;
use crate::vector::Vector2D;

/// Size of the toroidal world. Both dimensions are always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, BoundsError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(BoundsError::InvalidWidth(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(BoundsError::InvalidHeight(height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Shortest displacement from `a` to `b`, choosing per axis between the
    /// direct path and the one that crosses the seam.
    pub fn shortest_delta(&self, a: Vector2D, b: Vector2D) -> Vector2D {
        Vector2D::new(
            wrap_axis_delta(b.x - a.x, self.width),
            wrap_axis_delta(b.y - a.y, self.height),
        )
    }

    pub fn shortest_distance(&self, a: Vector2D, b: Vector2D) -> f32 {
        self.shortest_delta(a, b).magnitude()
    }

    /// Folds a position back into `[0, width) × [0, height)`.
    ///
    /// Usually a single step of one extent; positions left far outside by a
    /// shrinking resize are folded in fully.
    pub fn wrap(&self, position: Vector2D) -> Vector2D {
        Vector2D::new(
            wrap_axis(position.x, self.width),
            wrap_axis(position.y, self.height),
        )
    }

    pub fn contains(&self, position: Vector2D) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }
}

fn wrap_axis_delta(delta: f32, extent: f32) -> f32 {
    let half = extent / 2.0;
    if delta > half {
        delta - extent
    } else if delta < -half {
        delta + extent
    } else {
        delta
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let mut wrapped = value % extent;
    if wrapped < 0.0 {
        wrapped += extent;
    }
    // -tiny + extent can round up to exactly extent
    if wrapped >= extent {
        wrapped = 0.0;
    }
    wrapped
}
