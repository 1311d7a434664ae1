use rand::Rng;

/// Below this magnitude a velocity is treated as stalled and gets a fresh heading.
pub const STALL_EPSILON: f32 = 0.001;

pub(crate) fn sqrt(value: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        value.sqrt()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::sqrtf(value)
    }
}

pub(crate) fn sin_cos(angle: f32) -> (f32, f32) {
    #[cfg(feature = "std")]
    {
        angle.sin_cos()
    }
    #[cfg(not(feature = "std"))]
    {
        (libm::sinf(angle), libm::cosf(angle))
    }
}

/// A 2D vector used for position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Vector of length `magnitude` pointing along `angle` (radians).
    pub fn from_angle(angle: f32, magnitude: f32) -> Self {
        let (sin, cos) = sin_cos(angle);
        Self::new(cos * magnitude, sin * magnitude)
    }

    /// Vector of length `magnitude` with a heading drawn uniformly from `[0, 2π)`.
    pub fn random_heading<R: Rng + ?Sized>(rng: &mut R, magnitude: f32) -> Self {
        let angle = rng.gen_range(0.0..core::f32::consts::TAU);
        Self::from_angle(angle, magnitude)
    }

    pub fn magnitude(&self) -> f32 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    pub fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rescales to at most `max`; vectors already under the ceiling are returned as is.
    pub fn limit(&self, max: f32) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.scale(max / mag)
        } else {
            *self
        }
    }

    /// Rescales to at least `min`.
    ///
    /// A stalled vector (magnitude within [`STALL_EPSILON`] of zero) cannot be
    /// scaled, so it is replaced by a vector of length `min` at a random heading.
    pub fn ensure_min_speed<R: Rng + ?Sized>(&self, min: f32, rng: &mut R) -> Self {
        let mag = self.magnitude();
        if mag <= STALL_EPSILON {
            Self::random_heading(rng, min)
        } else if mag < min {
            self.scale(min / mag)
        } else {
            *self
        }
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        self.scale(scalar)
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}
