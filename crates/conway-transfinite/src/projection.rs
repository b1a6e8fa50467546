//! Reducing a transfinite number to a finite one.

use conway_core::{NumberSet, Result, Side, Surreal, SurrealError};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::generator::Extent;
use crate::number::TransfiniteNumber;

impl TransfiniteNumber {
    /// Projects the number to a finite [`Surreal`].
    ///
    /// Only the last element of each side is used: by the ordering contract
    /// on generators it is the greatest left or least right element. It is
    /// projected recursively and the result is built in simplified form.
    /// Elements shared between several parents are projected once.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::UnboundedSet`] if any side met during the
    /// descent is unbounded, and [`SurrealError::InvalidConstruction`] if the
    /// generators broke their ordering contract.
    pub fn to_finite(&self) -> Result<Surreal> {
        self.project(&mut FxHashMap::default())
    }

    fn project(&self, projected: &mut FxHashMap<*const (), Surreal>) -> Result<Surreal> {
        if let Some(done) = projected.get(&self.as_ptr()) {
            return Ok(done.clone());
        }

        let left_len = finite_len(self.left_extent(), Side::Left)?;
        let right_len = finite_len(self.right_extent(), Side::Right)?;

        let mut left = NumberSet::new();
        if let Some(last) = left_len.checked_sub(1) {
            left.insert(self.get_left(last)?.project(projected)?);
        }
        let mut right = NumberSet::new();
        if let Some(last) = right_len.checked_sub(1) {
            right.insert(self.get_right(last)?.project(projected)?);
        }

        let finite = Surreal::new_simplified(left, right)?;
        projected.insert(self.as_ptr(), finite.clone());
        Ok(finite)
    }

    /// Evaluates the number as an `f64` through [`TransfiniteNumber::to_finite`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`TransfiniteNumber::to_finite`]; an
    /// unbounded number has no float value.
    pub fn to_f64(&self) -> Result<f64> {
        self.to_finite().map(|finite| finite.to_f64())
    }
}

fn finite_len(extent: Extent, side: Side) -> Result<usize> {
    match extent {
        Extent::Finite(len) => Ok(len),
        Extent::Unbounded => {
            debug!("Cannot project: {} side is unbounded", side);
            Err(SurrealError::UnboundedSet { side })
        }
    }
}

impl TryFrom<&TransfiniteNumber> for Surreal {
    type Error = SurrealError;

    fn try_from(value: &TransfiniteNumber) -> Result<Self> {
        value.to_finite()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::generator::GeneratedSet;

    #[test]
    fn test_round_trip() {
        for x in [-3.0, -0.75, 0.0, 0.375, 2.0, 5.5] {
            let finite = Surreal::from_f64(x).unwrap();
            let projected = TransfiniteNumber::from(&finite).to_finite().unwrap();
            assert_eq!(projected, finite);
        }
    }

    #[test]
    fn test_unbounded_left_fails() {
        let omega = TransfiniteNumber::new(
            GeneratedSet::unbounded(|n: usize| TransfiniteNumber::from(i64::try_from(n).unwrap())),
            GeneratedSet::empty(),
        );
        assert_eq!(
            omega.to_finite(),
            Err(SurrealError::UnboundedSet { side: Side::Left })
        );
        assert_eq!(omega.cached_left(), 0);
        assert!(Surreal::try_from(&omega).is_err());
        assert!(omega.to_f64().is_err());
    }

    #[test]
    fn test_unbounded_child_fails() {
        let epsilon = TransfiniteNumber::new(
            GeneratedSet::empty(),
            GeneratedSet::unbounded(|n: usize| {
                TransfiniteNumber::from_f64(0.5f64.powi(i32::try_from(n).unwrap())).unwrap()
            }),
        );
        let wrapper = TransfiniteNumber::new(
            GeneratedSet::finite(move |_: usize| epsilon.clone(), 1),
            GeneratedSet::empty(),
        );
        assert_eq!(
            wrapper.to_finite(),
            Err(SurrealError::UnboundedSet { side: Side::Right })
        );
    }

    #[test]
    fn test_uses_last_generated_element() {
        let three = TransfiniteNumber::new(
            GeneratedSet::finite(|n: usize| TransfiniteNumber::from(i64::try_from(n).unwrap()), 3),
            GeneratedSet::empty(),
        );
        // { 0, 1, 2 | } projects to { 2 | } = 3
        assert_eq!(three.to_finite().unwrap(), Surreal::from(3));
        assert_eq!(three.cached_left(), 1);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(TransfiniteNumber::from(2).to_f64().unwrap(), 2.0);
        let half = TransfiniteNumber::from_f64(0.5).unwrap();
        assert_eq!(half.to_f64().unwrap(), 0.5);
    }

    #[test]
    fn test_non_dyadic_round_trip() {
        for x in [0.1, 1.0 / 3.0] {
            let finite = Surreal::from_f64(x).unwrap();
            let wrapped = TransfiniteNumber::from_f64(x).unwrap();
            let projected = wrapped.to_finite().unwrap();

            assert_eq!(projected, finite);
            assert_eq!(projected.depth(), finite.depth());
            assert_eq!(wrapped.to_f64().unwrap(), x);
        }
    }

    #[test]
    fn test_broken_ordering_contract() {
        let bad = TransfiniteNumber::new(
            GeneratedSet::finite(|_: usize| TransfiniteNumber::from(1), 1),
            GeneratedSet::finite(|_: usize| TransfiniteNumber::from(0), 1),
        );
        assert!(matches!(
            bad.to_finite(),
            Err(SurrealError::InvalidConstruction { .. })
        ));
    }
}
