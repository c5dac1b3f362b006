//! Radian-backed angle value.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::{TAU, normalize_degrees_0_to_360};

/// A plane angle, stored in radians.
///
/// # Example
/// ```
/// # use local_solar::Angle;
/// let quarter = Angle::from_degrees(90.0);
/// assert!((quarter / Angle::ONE_ROTATION - 0.25).abs() < 1e-12);
/// assert!(((quarter * 2.0).degrees() - 180.0).abs() < 1e-12);
/// assert!(((-quarter).normalized().degrees() - 270.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f64);

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self(0.0);

    /// A full turn (360°).
    pub const ONE_ROTATION: Self = Self(TAU);

    /// Creates an angle from radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Creates an angle from degrees.
    #[must_use]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// Creates an angle from a number of full turns.
    #[must_use]
    pub const fn from_rotations(rotations: f64) -> Self {
        Self(rotations * TAU)
    }

    /// Value in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// Value in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Whether the underlying value is NaN.
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Same direction, expressed within [0°, 360°).
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from_degrees(normalize_degrees_0_to_360(self.degrees()))
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    fn mul(self, rhs: Angle) -> Angle {
        Angle(self * rhs.0)
    }
}

/// Ratio of two angles.
impl Div for Angle {
    type Output = f64;
    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}°", p, self.degrees()),
            None => write!(f, "{}°", self.degrees()),
        }
    }
}
