//! Finite surreal numbers.
//!
//! A [`Surreal`] is a pair `{ L | R }` of finite sets of previously built
//! surreal numbers. Values are immutable and share their children through
//! reference counting, so cloning is cheap.

use std::collections::BTreeSet;
use std::rc::Rc;

use crate::error::{Result, SurrealError};
use crate::{float, order};

/// Largest integer magnitude accepted by [`Surreal::try_from_int`] and by
/// the integer part of [`Surreal::from_f64`].
///
/// An integer `n` is `|n|` levels deep, and comparison recurses once per
/// level, so much deeper chains exhaust the stack.
pub const MAX_MAGNITUDE: u64 = 1 << 10;

/// A set of surreal numbers.
///
/// Membership follows the numeric order of [`Surreal`], not structure: two
/// numerically equal numbers occupy the same slot and the first one inserted
/// is kept.
pub type NumberSet = BTreeSet<Surreal>;

/// A finite surreal number `{ L | R }`.
///
/// Every value is a dyadic rational. Equality and ordering (`==`, `<`, ...)
/// are the numeric relations from [`crate::order`].
///
/// The float value and the depth are computed once, when the number is
/// built, from the cached values of its elements.
#[derive(Clone, Default)]
pub struct Surreal(Rc<Node>);

#[derive(Default)]
struct Node {
    left: NumberSet,
    right: NumberSet,
    value: f64,
    depth: usize,
}

impl Drop for Node {
    // Unlinks uniquely owned descendants onto a heap stack so that dropping
    // a long chain does not recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Surreal> = Vec::new();
        pending.extend(std::mem::take(&mut self.left));
        pending.extend(std::mem::take(&mut self.right));

        while let Some(Surreal(node)) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(node) {
                pending.extend(std::mem::take(&mut node.left));
                pending.extend(std::mem::take(&mut node.right));
            }
        }
    }
}

impl Surreal {
    /// Creates `{ L | R }`, keeping every element of both sets.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::InvalidConstruction`] if some element of
    /// `right` is `<=` some element of `left`.
    pub fn new(left: NumberSet, right: NumberSet) -> Result<Self> {
        check_sets(&left, &right)?;
        Ok(Self::from_parts(left, right))
    }

    /// Creates `{ L | R }` keeping only the greatest element of `left` and
    /// the least element of `right`.
    ///
    /// The result is numerically equal to [`Surreal::new`] on the same sets.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::InvalidConstruction`] under the same
    /// conditions as [`Surreal::new`].
    pub fn new_simplified(mut left: NumberSet, mut right: NumberSet) -> Result<Self> {
        check_sets(&left, &right)?;
        let left = left.pop_last().into_iter().collect();
        let right = right.pop_first().into_iter().collect();
        Ok(Self::from_parts(left, right))
    }

    /// Creates `{ left | right }` from two single numbers.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::InvalidConstruction`] unless `left < right`.
    pub fn pair(left: &Surreal, right: &Surreal) -> Result<Self> {
        if !order::lt(left, right) {
            return Err(SurrealError::InvalidConstruction {
                left: left.to_f64(),
                right: right.to_f64(),
            });
        }
        Ok(Self::from_parts(
            NumberSet::from([left.clone()]),
            NumberSet::from([right.clone()]),
        ))
    }

    /// Builds a number without checking the ordering of its sets.
    ///
    /// Callers guarantee validity; arithmetic and negation of valid numbers
    /// are valid by construction.
    pub(crate) fn from_parts(left: NumberSet, right: NumberSet) -> Self {
        let value = float::evaluate(&left, &right);
        let depth = left
            .iter()
            .chain(&right)
            .map(|elem| elem.depth() + 1)
            .max()
            .unwrap_or(0);
        Self(Rc::new(Node {
            left,
            right,
            value,
            depth,
        }))
    }

    /// Returns `{ | }`.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns `{ 0 | }`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_parts(NumberSet::from([Self::zero()]), NumberSet::new())
    }

    /// Creates the integer `n`: zero nested `|n|` times on the left for
    /// positive `n`, on the right for negative `n`.
    ///
    /// Time and memory are linear in `|n|`; see [`Surreal::try_from_int`]
    /// for a bounded variant.
    #[must_use]
    pub fn from_int(n: i64) -> Self {
        let mut result = Self::zero();
        for _ in 0..n.unsigned_abs() {
            let wrapped = NumberSet::from([result]);
            result = if n > 0 {
                Self::from_parts(wrapped, NumberSet::new())
            } else {
                Self::from_parts(NumberSet::new(), wrapped)
            };
        }
        result
    }

    /// Like [`Surreal::from_int`], but refuses magnitudes above
    /// [`MAX_MAGNITUDE`].
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::DepthLimitExceeded`] if `|n|` is over the
    /// limit.
    pub fn try_from_int(n: i64) -> Result<Self> {
        if n.unsigned_abs() > MAX_MAGNITUDE {
            return Err(SurrealError::DepthLimitExceeded {
                depth: usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX),
                limit: usize::try_from(MAX_MAGNITUDE).unwrap_or(usize::MAX),
            });
        }
        Ok(Self::from_int(n))
    }

    /// The left set.
    #[must_use]
    pub fn left(&self) -> &NumberSet {
        &self.0.left
    }

    /// The right set.
    #[must_use]
    pub fn right(&self) -> &NumberSet {
        &self.0.right
    }

    /// The greatest element of the left set.
    #[must_use]
    pub fn greatest_left(&self) -> Option<&Surreal> {
        self.0.left.last()
    }

    /// The least element of the right set.
    #[must_use]
    pub fn least_right(&self) -> Option<&Surreal> {
        self.0.right.first()
    }

    /// Total number of elements in both sets.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.0.left.len() + self.0.right.len()
    }

    /// Nesting depth: 0 for `{ | }`, otherwise one more than the deepest
    /// element.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    /// The float value computed at construction.
    pub(crate) fn value(&self) -> f64 {
        self.0.value
    }

    /// Address of the shared representation, usable as an identity key while
    /// the value is alive.
    #[must_use]
    pub fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Returns true if both values share the same representation in memory.
    ///
    /// Memo table lookups hand out shared representations, so this tells
    /// whether two results came from the same stored entry.
    #[must_use]
    pub fn ptr_eq(a: &Surreal, b: &Surreal) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    /// Returns `-self = { -R | -L }`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_parts(negate_set(&self.0.right), negate_set(&self.0.left))
    }
}

/// Negates every element of a set.
#[must_use]
pub fn negate_set(set: &NumberSet) -> NumberSet {
    set.iter().map(Surreal::negate).collect()
}

/// Rejects pseudo-numbers: every right element must exceed every left one.
fn check_sets(left: &NumberSet, right: &NumberSet) -> Result<()> {
    for r in right {
        for l in left {
            if order::le(r, l) {
                return Err(SurrealError::InvalidConstruction {
                    left: l.to_f64(),
                    right: r.to_f64(),
                });
            }
        }
    }
    Ok(())
}

impl From<i64> for Surreal {
    fn from(n: i64) -> Self {
        Self::from_int(n)
    }
}

impl From<i32> for Surreal {
    fn from(n: i32) -> Self {
        Self::from_int(i64::from(n))
    }
}
