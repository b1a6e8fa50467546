//! The order relation on finite surreal numbers.
//!
//! Everything is derived from Conway's recursive definition of `<=`:
//!
//! ```text
//! a <= b  iff  no x in L(a) has b <= x,  and  no y in R(b) has y <= a
//! ```
//!
//! The recursion bottoms out at `{ | } <= { | }`, where both quantifiers are
//! vacuous. Numbers built by bisection share their elements heavily, and the
//! plain recursion revisits the same pair once per path. Deep comparisons
//! therefore remember each `(a, b)` pair they have settled, keyed by the
//! identity of the shared representations, for the duration of one call.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::number::Surreal;

/// Combined depth up to which the unmemoized recursion is used.
const PLAIN_DEPTH: usize = 16;

type Settled = FxHashMap<(*const (), *const ()), bool>;

/// Returns `a <= b`.
#[must_use]
pub fn le(a: &Surreal, b: &Surreal) -> bool {
    if a.depth() + b.depth() <= PLAIN_DEPTH {
        le_plain(a, b)
    } else {
        le_settled(a, b, &mut Settled::default())
    }
}

fn le_plain(a: &Surreal, b: &Surreal) -> bool {
    a.left().iter().all(|x| !le_plain(b, x)) && b.right().iter().all(|y| !le_plain(y, a))
}

fn le_settled(a: &Surreal, b: &Surreal, settled: &mut Settled) -> bool {
    let key = (a.as_ptr(), b.as_ptr());
    if let Some(&known) = settled.get(&key) {
        return known;
    }
    let result = a.left().iter().all(|x| !le_settled(b, x, settled))
        && b.right().iter().all(|y| !le_settled(y, a, settled));
    settled.insert(key, result);
    result
}

/// Returns `a >= b`.
#[must_use]
pub fn ge(a: &Surreal, b: &Surreal) -> bool {
    le(b, a)
}

/// Returns `a = b` in the numeric sense: `a <= b` and `b <= a`.
///
/// Structurally different numbers may be equal, e.g. `{ -1 | 1 } = { | }`.
#[must_use]
pub fn eq(a: &Surreal, b: &Surreal) -> bool {
    le(a, b) && le(b, a)
}

/// Returns `a != b`.
#[must_use]
pub fn ne(a: &Surreal, b: &Surreal) -> bool {
    !eq(a, b)
}

/// Returns `a > b`.
#[must_use]
pub fn gt(a: &Surreal, b: &Surreal) -> bool {
    !le(a, b)
}

/// Returns `a < b`.
#[must_use]
pub fn lt(a: &Surreal, b: &Surreal) -> bool {
    gt(b, a)
}

/// Three-way comparison built from two `<=` checks.
#[must_use]
pub fn compare(a: &Surreal, b: &Surreal) -> Ordering {
    match (le(a, b), le(b, a)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, _) => Ordering::Greater,
    }
}

impl PartialEq for Surreal {
    fn eq(&self, other: &Self) -> bool {
        eq(self, other)
    }
}

impl Eq for Surreal {}

impl PartialOrd for Surreal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self, other))
    }

    fn lt(&self, other: &Self) -> bool {
        lt(self, other)
    }

    fn le(&self, other: &Self) -> bool {
        le(self, other)
    }

    fn gt(&self, other: &Self) -> bool {
        gt(self, other)
    }

    fn ge(&self, other: &Self) -> bool {
        ge(self, other)
    }
}

impl Ord for Surreal {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}
