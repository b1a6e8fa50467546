//! Lazily generated sides of a transfinite number.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use conway_core::{Result, Side, SurrealError};
use rustc_hash::FxHashMap;
use tracing::{trace, warn};

use crate::number::TransfiniteNumber;

/// Produces the element at a given index of one side.
///
/// Left generators must enumerate in non-strict ascending order, right
/// generators in non-strict descending order, and every right element must
/// exceed every left element. None of this is checked.
pub trait Generator {
    /// Returns the element at `index`.
    fn generate(&self, index: usize) -> TransfiniteNumber;
}

impl<F> Generator for F
where
    F: Fn(usize) -> TransfiniteNumber,
{
    fn generate(&self, index: usize) -> TransfiniteNumber {
        self(index)
    }
}

/// How many elements a side has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extent {
    /// Exactly this many elements, at indices `0..n`.
    Finite(usize),
    /// Infinitely many elements.
    Unbounded,
}

impl Extent {
    /// Reads the signed convention: negative means unbounded.
    #[must_use]
    pub fn from_signed(size: isize) -> Self {
        usize::try_from(size).map_or(Extent::Unbounded, Extent::Finite)
    }

    /// Returns true for [`Extent::Unbounded`].
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Extent::Unbounded)
    }
}

/// One side of a transfinite number: a generator, its extent and the
/// elements produced so far.
///
/// Each index is generated at most once; later requests are served from the
/// cache.
pub struct GeneratedSet {
    generator: Option<Rc<dyn Generator>>,
    extent: Extent,
    cache: RefCell<FxHashMap<usize, TransfiniteNumber>>,
}

impl GeneratedSet {
    /// A side with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            generator: None,
            extent: Extent::Finite(0),
            cache: RefCell::default(),
        }
    }

    /// A side with `len` elements produced by `generator`.
    #[must_use]
    pub fn finite(generator: impl Generator + 'static, len: usize) -> Self {
        Self::with_extent(Some(Rc::new(generator)), Extent::Finite(len))
    }

    /// A side with infinitely many elements produced by `generator`.
    #[must_use]
    pub fn unbounded(generator: impl Generator + 'static) -> Self {
        Self::with_extent(Some(Rc::new(generator)), Extent::Unbounded)
    }

    /// A side from an optional shared generator. Without a generator the side
    /// is empty whatever `extent` says.
    #[must_use]
    pub fn with_extent(generator: Option<Rc<dyn Generator>>, extent: Extent) -> Self {
        let extent = if generator.is_some() {
            extent
        } else {
            if extent != Extent::Finite(0) {
                warn!("Side of extent {:?} has no generator; treating it as empty", extent);
            }
            Extent::Finite(0)
        };
        Self {
            generator,
            extent,
            cache: RefCell::default(),
        }
    }

    /// The number of elements on this side.
    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// How many elements have been generated so far.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns the element at `index`, generating and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::IndexOutOfRange`] if the side is finite and
    /// `index` is not below its length.
    pub fn get(&self, side: Side, index: usize) -> Result<TransfiniteNumber> {
        if let Some(hit) = self.cache.borrow().get(&index) {
            return Ok(hit.clone());
        }

        let generator = match (&self.generator, self.extent) {
            (Some(generator), Extent::Unbounded) => generator,
            (Some(generator), Extent::Finite(len)) if index < len => generator,
            (_, Extent::Finite(len)) => {
                return Err(SurrealError::IndexOutOfRange { side, index, len });
            }
            (None, Extent::Unbounded) => unreachable!("unbounded sides always have a generator"),
        };

        trace!("Generating {} element {}", side, index);
        let value = generator.generate(index);
        self.cache.borrow_mut().insert(index, value.clone());
        Ok(value)
    }
}

impl Default for GeneratedSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for GeneratedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedSet")
            .field("extent", &self.extent)
            .field("cached", &self.cached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_extent_from_signed() {
        assert_eq!(Extent::from_signed(-1), Extent::Unbounded);
        assert_eq!(Extent::from_signed(0), Extent::Finite(0));
        assert_eq!(Extent::from_signed(3), Extent::Finite(3));
        assert!(Extent::Unbounded.is_unbounded());
    }

    #[test]
    fn test_generator_runs_once_per_index() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let set = GeneratedSet::unbounded(move |n: usize| {
            counter.set(counter.get() + 1);
            TransfiniteNumber::from(i64::try_from(n).unwrap())
        });

        set.get(Side::Left, 4).unwrap();
        set.get(Side::Left, 4).unwrap();
        assert_eq!(calls.get(), 1);

        set.get(Side::Left, 0).unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(set.cached(), 2);
    }

    #[test]
    fn test_finite_bounds() {
        let set = GeneratedSet::finite(|_: usize| TransfiniteNumber::default(), 2);
        assert!(set.get(Side::Right, 1).is_ok());
        assert_eq!(
            set.get(Side::Right, 2).unwrap_err(),
            SurrealError::IndexOutOfRange {
                side: Side::Right,
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn test_missing_generator_is_empty() {
        let set = GeneratedSet::with_extent(None, Extent::Unbounded);
        assert_eq!(set.extent(), Extent::Finite(0));
        assert!(set.get(Side::Left, 0).is_err());
    }
}
