//! Conversion between finite surreal numbers and `f64`.
//!
//! Finite surreal numbers are dyadic rationals, so the conversion to `f64` is
//! exact as long as the value fits in the mantissa. The reverse direction
//! bisects the unit interval around the input until the midpoint lands on it.

use crate::error::{Result, SurrealError};
use crate::number::{NumberSet, Surreal, MAX_MAGNITUDE};

impl Surreal {
    /// Evaluates the number as an `f64`.
    ///
    /// - `{ | }` is `0`
    /// - `{ L | }` is `max(L) + 1`
    /// - `{ | R }` is `min(R) - 1`
    /// - `{ L | R }` is the midpoint of `max(L)` and `min(R)`
    ///
    /// The value is computed once per number when it is built, so this is a
    /// field read even for numbers whose elements are heavily shared.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.value()
    }

    /// Builds the number closest to `value` by bisection.
    ///
    /// Integers go through [`Surreal::from_int`]. Any other input starts from
    /// `{ floor | ceil }` and halves the interval, one level of depth per
    /// step, until the midpoint is bit-identical to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::Unrepresentable`] for NaN, infinities and
    /// values whose magnitude exceeds [`MAX_MAGNITUDE`].
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value.abs() > MAX_MAGNITUDE as f64 {
            return Err(SurrealError::Unrepresentable(value));
        }

        let mut floor_value = value.floor();
        if floor_value == value {
            return Ok(Self::from_int(value as i64));
        }
        let mut ceil_value = floor_value + 1.0;

        let mut floor = Self::from_int(floor_value as i64);
        let mut ceil = Self::from_int(ceil_value as i64);
        let mut mid_value = (floor_value + ceil_value) / 2.0;
        let mut mid = between(&floor, &ceil);

        while mid_value != value {
            if value < mid_value {
                ceil_value = mid_value;
                ceil = mid;
            } else {
                floor_value = mid_value;
                floor = mid;
            }
            mid_value = (floor_value + ceil_value) / 2.0;
            mid = between(&floor, &ceil);
        }

        Ok(mid)
    }
}

/// The float value of `{ left | right }` from the cached values of its
/// elements.
pub(crate) fn evaluate(left: &NumberSet, right: &NumberSet) -> f64 {
    let greatest_left = left.iter().map(Surreal::to_f64).reduce(f64::max);
    let least_right = right.iter().map(Surreal::to_f64).reduce(f64::min);

    match (greatest_left, least_right) {
        (None, None) => 0.0,
        (Some(l), None) => l + 1.0,
        (None, Some(r)) => r - 1.0,
        (Some(l), Some(r)) => (l + r) / 2.0,
    }
}

/// `{ lo | hi }` for `lo < hi`, which the bisection maintains.
fn between(lo: &Surreal, hi: &Surreal) -> Surreal {
    Surreal::from_parts(NumberSet::from([lo.clone()]), NumberSet::from([hi.clone()]))
}

impl From<&Surreal> for f64 {
    fn from(value: &Surreal) -> Self {
        value.to_f64()
    }
}

impl From<Surreal> for f64 {
    fn from(value: Surreal) -> Self {
        value.to_f64()
    }
}

impl TryFrom<f64> for Surreal {
    type Error = SurrealError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}
