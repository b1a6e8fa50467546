//! Surreal numbers whose sides are produced on demand.

use std::rc::Rc;

use conway_core::{Result, Side, Surreal, SurrealError};
use rustc_hash::FxHashMap;

use crate::generator::{Extent, GeneratedSet, Generator};

/// A surreal number `{ L | R }` whose sides may be infinite.
///
/// Each side is a [`GeneratedSet`]. Elements are produced lazily and cached
/// per instance; clones share the same instance and therefore the same
/// caches. Apart from those caches the value is immutable.
///
/// ```
/// use conway_transfinite::{GeneratedSet, TransfiniteNumber};
///
/// // omega = { 0, 1, 2, ... | }
/// let omega = TransfiniteNumber::new(
///     GeneratedSet::unbounded(|n: usize| TransfiniteNumber::from(n as i64)),
///     GeneratedSet::empty(),
/// );
/// assert!(omega.to_finite().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransfiniteNumber(Rc<Sides>);

#[derive(Debug, Default)]
struct Sides {
    left: GeneratedSet,
    right: GeneratedSet,
}

impl TransfiniteNumber {
    /// Creates a number from its two sides.
    ///
    /// The ordering requirements on the generators are trusted, not checked.
    #[must_use]
    pub fn new(left: GeneratedSet, right: GeneratedSet) -> Self {
        Self(Rc::new(Sides { left, right }))
    }

    /// Creates a number from optional generators and signed sizes, where a
    /// negative size marks an unbounded side.
    #[must_use]
    pub fn from_generators(
        left: Option<Rc<dyn Generator>>,
        right: Option<Rc<dyn Generator>>,
        sizes: (isize, isize),
    ) -> Self {
        Self::new(
            GeneratedSet::with_extent(left, Extent::from_signed(sizes.0)),
            GeneratedSet::with_extent(right, Extent::from_signed(sizes.1)),
        )
    }

    /// Wraps a finite number. Each side keeps at most one element: the
    /// greatest left and the least right, each wrapped recursively.
    ///
    /// Shared elements of `value` are wrapped once and stay shared.
    #[must_use]
    pub fn from_finite(value: &Surreal) -> Self {
        Self::wrap(value, &mut FxHashMap::default())
    }

    fn wrap(value: &Surreal, wrapped: &mut FxHashMap<*const (), TransfiniteNumber>) -> Self {
        if let Some(done) = wrapped.get(&value.as_ptr()) {
            return done.clone();
        }
        let left = Self::wrap_side(value.greatest_left(), wrapped);
        let right = Self::wrap_side(value.least_right(), wrapped);
        let number = Self::new(left, right);
        wrapped.insert(value.as_ptr(), number.clone());
        number
    }

    fn wrap_side(
        elem: Option<&Surreal>,
        wrapped: &mut FxHashMap<*const (), TransfiniteNumber>,
    ) -> GeneratedSet {
        match elem {
            Some(elem) => {
                let inner = Self::wrap(elem, wrapped);
                GeneratedSet::finite(move |_: usize| inner.clone(), 1)
            }
            None => GeneratedSet::empty(),
        }
    }

    /// Creates the integer `n`.
    #[must_use]
    pub fn from_int(n: i64) -> Self {
        Self::from_finite(&Surreal::from_int(n))
    }

    /// Creates the number closest to `value`; see [`Surreal::from_f64`].
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::Unrepresentable`] for NaN, infinities and
    /// out-of-range values.
    pub fn from_f64(value: f64) -> Result<Self> {
        Surreal::from_f64(value).map(|finite| Self::from_finite(&finite))
    }

    /// Returns the `n`-th element of the left side.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::IndexOutOfRange`] past the end of a finite side.
    pub fn get_left(&self, n: usize) -> Result<TransfiniteNumber> {
        self.0.left.get(Side::Left, n)
    }

    /// Returns the `n`-th element of the right side.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::IndexOutOfRange`] past the end of a finite side.
    pub fn get_right(&self, n: usize) -> Result<TransfiniteNumber> {
        self.0.right.get(Side::Right, n)
    }

    /// Size of the left side.
    #[must_use]
    pub fn left_extent(&self) -> Extent {
        self.0.left.extent()
    }

    /// Size of the right side.
    #[must_use]
    pub fn right_extent(&self) -> Extent {
        self.0.right.extent()
    }

    /// Identity of the shared sides, for memoizing walks over shared elements.
    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Number of left elements generated so far.
    #[must_use]
    pub fn cached_left(&self) -> usize {
        self.0.left.cached()
    }

    /// Number of right elements generated so far.
    #[must_use]
    pub fn cached_right(&self) -> usize {
        self.0.right.cached()
    }
}

impl From<&Surreal> for TransfiniteNumber {
    fn from(value: &Surreal) -> Self {
        Self::from_finite(value)
    }
}

impl From<Surreal> for TransfiniteNumber {
    fn from(value: Surreal) -> Self {
        Self::from_finite(&value)
    }
}

impl From<i64> for TransfiniteNumber {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl TryFrom<f64> for TransfiniteNumber {
    type Error = SurrealError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_has_empty_sides() {
        let zero = TransfiniteNumber::default();
        assert_eq!(zero.left_extent(), Extent::Finite(0));
        assert_eq!(zero.right_extent(), Extent::Finite(0));
        assert!(zero.get_left(0).is_err());
    }

    #[test]
    fn test_wrap_keeps_bounds() {
        let half = Surreal::pair(&Surreal::zero(), &Surreal::one()).unwrap();
        let wrapped = TransfiniteNumber::from(&half);

        assert_eq!(wrapped.left_extent(), Extent::Finite(1));
        assert_eq!(wrapped.right_extent(), Extent::Finite(1));
        assert_eq!(wrapped.get_left(0).unwrap().to_finite().unwrap(), Surreal::zero());
        assert_eq!(wrapped.get_right(0).unwrap().to_finite().unwrap(), Surreal::one());
    }

    #[test]
    fn test_from_generators_signed_sizes() {
        let naturals: Rc<dyn Generator> =
            Rc::new(|n: usize| TransfiniteNumber::from(i64::try_from(n).unwrap()));
        let omega = TransfiniteNumber::from_generators(Some(naturals), None, (-1, 0));

        assert!(omega.left_extent().is_unbounded());
        assert_eq!(omega.right_extent(), Extent::Finite(0));
        assert_eq!(omega.get_left(7).unwrap().to_f64().unwrap(), 7.0);
        assert_eq!(omega.cached_left(), 1);
        assert_eq!(omega.cached_right(), 0);
    }

    #[test]
    fn test_clones_share_cache() {
        let two = TransfiniteNumber::from(2);
        let copy = two.clone();
        two.get_left(0).unwrap();
        assert_eq!(copy.cached_left(), 1);
    }
}
