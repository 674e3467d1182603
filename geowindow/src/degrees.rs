//! Exact angular values (see [`Degrees`]).

use crate::error::GeoWindowError;
use approx::AbsDiffEq;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Neg, Sub};

/// Angle in degrees stored as a fixed-point decimal number.
///
/// Floating point values are converted into `Degrees` once, at the boundary of the API, and all
/// further arithmetic and comparisons are exact. This keeps the boundaries of the windows stable:
/// a point that lies exactly on an edge is always on that edge, no matter how the edge was
/// computed.
///
/// The resolution is `1 / UNITS_PER_DEGREE` of a degree (about 0.1 mm on the surface of the
/// Earth), which is also the value of [`Degrees::EPSILON`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "f64", try_from = "f64")]
pub struct Degrees(i64);

impl Degrees {
    /// Number of fixed-point units in one degree.
    pub const UNITS_PER_DEGREE: i64 = 1_000_000_000;
    /// Number of fractional digits used by the [`Display`] implementation.
    pub const DISPLAY_DIGITS: u32 = 6;

    /// Zero angle.
    pub const ZERO: Self = Self(0);
    /// The smallest representable positive angle.
    pub const EPSILON: Self = Self(1);
    /// 90 degrees.
    pub const QUARTER_TURN: Self = Self::from_whole(90);
    /// 180 degrees.
    pub const HALF_TURN: Self = Self::from_whole(180);
    /// 360 degrees.
    pub const FULL_TURN: Self = Self::from_whole(360);

    /// Creates an angle from a whole number of degrees.
    pub const fn from_whole(degrees: i64) -> Self {
        Self(degrees * Self::UNITS_PER_DEGREE)
    }

    /// Creates an angle from the raw number of fixed-point units.
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Raw number of fixed-point units.
    pub const fn units(self) -> i64 {
        self.0
    }

    /// Converts a floating point value, rounding to the nearest unit (half away from zero).
    ///
    /// Returns `None` if the value is not finite or does not fit into the representation.
    pub fn from_f64(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }

        let scaled = (degrees * Self::UNITS_PER_DEGREE as f64).round();
        if scaled > i64::MIN as f64 && scaled < i64::MAX as f64 {
            Some(Self(scaled as i64))
        } else {
            None
        }
    }

    /// Nearest floating point value.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::UNITS_PER_DEGREE as f64
    }

    /// Value in radians.
    pub fn to_radians(self) -> f64 {
        self.to_f64().to_radians()
    }

    /// Absolute value. Saturates at the largest representable angle.
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Non-negative remainder of the division by `modulus`, see [`i64::rem_euclid`].
    pub fn rem_euclid(self, modulus: Self) -> Self {
        Self(self.0.rem_euclid(modulus.0))
    }

    /// Returns `true` if the value is below zero.
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Degrees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Degrees {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl AbsDiffEq for Degrees {
    type Epsilon = Degrees;

    fn default_epsilon() -> Self::Epsilon {
        Self::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff(other.0) <= epsilon.0.unsigned_abs()
    }
}

impl From<Degrees> for f64 {
    fn from(value: Degrees) -> Self {
        value.to_f64()
    }
}

impl TryFrom<f64> for Degrees {
    type Error = GeoWindowError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value).ok_or(GeoWindowError::InvalidArgument("degrees"))
    }
}

/// Prints the value rounded to [`Degrees::DISPLAY_DIGITS`] fractional digits with trailing
/// zeros removed, e.g. `-179.5` or `90`.
impl Display for Degrees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display_unit = (Self::UNITS_PER_DEGREE / 10i64.pow(Self::DISPLAY_DIGITS)) as u64;
        let per_degree = 10u64.pow(Self::DISPLAY_DIGITS);

        let rounded = (self.0.unsigned_abs() + display_unit / 2) / display_unit;
        let whole = rounded / per_degree;
        let fraction = rounded % per_degree;
        let sign = if self.0 < 0 && rounded != 0 { "-" } else { "" };

        if fraction == 0 {
            write!(f, "{sign}{whole}")
        } else {
            let digits = format!("{fraction:0width$}", width = Self::DISPLAY_DIGITS as usize);
            write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_f64_rounds_to_nearest_unit() {
        assert_eq!(Degrees::from_f64(1.0), Some(Degrees::from_whole(1)));
        assert_eq!(Degrees::from_f64(-0.5), Some(Degrees::from_units(-500_000_000)));
        assert_eq!(Degrees::from_f64(1e-9), Some(Degrees::EPSILON));
        assert_eq!(Degrees::from_f64(4e-10), Some(Degrees::ZERO));

        // 0.1 + 0.2 is not 0.3 in f64, but it is after conversion
        assert_eq!(Degrees::from_f64(0.1 + 0.2), Degrees::from_f64(0.3));
    }

    #[test]
    fn from_f64_rejects_invalid_values() {
        assert_eq!(Degrees::from_f64(f64::NAN), None);
        assert_eq!(Degrees::from_f64(f64::INFINITY), None);
        assert_eq!(Degrees::from_f64(f64::NEG_INFINITY), None);
        assert_eq!(Degrees::from_f64(1e300), None);
        assert_eq!(Degrees::from_f64(i64::MIN as f64 / 1e9), None);
        assert!(Degrees::try_from(f64::NAN).is_err());
    }

    #[test]
    fn arithmetic_is_exact() {
        let a = Degrees::from_f64(0.1).unwrap();
        let b = Degrees::from_f64(0.2).unwrap();
        assert_eq!(a + b, Degrees::from_f64(0.3).unwrap());
        assert_eq!(a - b, -a);
        assert_eq!((a - b).abs(), a);
        assert!((a - b).is_negative());
        assert!(Degrees::zero().is_zero());
        assert_eq!(
            Degrees::from_units(i64::MIN).abs(),
            Degrees::from_units(i64::MAX)
        );
    }

    #[test]
    fn rem_euclid_is_non_negative() {
        assert_eq!(
            Degrees::from_whole(-10).rem_euclid(Degrees::FULL_TURN),
            Degrees::from_whole(350)
        );
        assert_eq!(
            Degrees::from_whole(730).rem_euclid(Degrees::FULL_TURN),
            Degrees::from_whole(10)
        );
    }

    #[test]
    fn abs_diff_eq() {
        let a = Degrees::from_whole(10);
        assert_abs_diff_eq!(a, a + Degrees::EPSILON);
        assert!(!a.abs_diff_eq(&(a + Degrees::from_units(2)), Degrees::EPSILON));
        assert_abs_diff_eq!(a, Degrees::from_whole(11), epsilon = Degrees::from_whole(1));
    }

    #[test]
    fn display() {
        assert_eq!(Degrees::from_whole(90).to_string(), "90");
        assert_eq!(Degrees::from_whole(-180).to_string(), "-180");
        assert_eq!(Degrees::from_f64(-179.5).unwrap().to_string(), "-179.5");
        assert_eq!(Degrees::from_f64(12.3456789).unwrap().to_string(), "12.345679");
        assert_eq!(Degrees::from_f64(0.0000004).unwrap().to_string(), "0");
        assert_eq!(Degrees::from_f64(-0.0000004).unwrap().to_string(), "0");
        assert_eq!(Degrees::from_f64(-0.000001).unwrap().to_string(), "-0.000001");
    }

    #[test]
    fn serde_uses_floating_point_degrees() {
        let value = Degrees::from_f64(-12.5).unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), "-12.5");
        assert_eq!(
            serde_json::from_str::<Degrees>("45.25").unwrap(),
            Degrees::from_f64(45.25).unwrap()
        );
    }
}
