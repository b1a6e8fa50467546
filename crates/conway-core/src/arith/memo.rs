//! Memo tables for binary operations.
//!
//! A table maps an unordered operand pair to its result. Keys are stored as
//! `(min, max)` under the numeric order, so `(a, b)` and `(b, a)` hit the
//! same entry, as does any numerically equal operand.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::number::Surreal;
use crate::order;

/// Counters describing how a [`MemoTable`] has been used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that required a computation.
    pub misses: u64,
    /// Stored entries replaced in place by a simpler equal result.
    pub rewrites: u64,
    /// Fresh results replaced by an equal stored value.
    pub reuses: u64,
}

/// A memo table for one commutative binary operation.
#[derive(Clone, Debug, Default)]
pub struct MemoTable {
    entries: BTreeMap<(Surreal, Surreal), Surreal>,
    stats: MemoStats,
}

impl MemoTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders an operand pair as `(min, max)`.
    fn key(a: &Surreal, b: &Surreal) -> (Surreal, Surreal) {
        if order::le(a, b) {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    /// Returns the stored result for `a` and `b` in either order.
    #[must_use]
    pub fn get(&self, a: &Surreal, b: &Surreal) -> Option<&Surreal> {
        self.entries.get(&Self::key(a, b))
    }

    /// Like [`MemoTable::get`], but records the hit or miss.
    pub(crate) fn lookup(&mut self, a: &Surreal, b: &Surreal) -> Option<Surreal> {
        match self.entries.get(&Self::key(a, b)) {
            Some(found) => {
                self.stats.hits += 1;
                Some(found.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Stores `value` for the pair unless an entry already exists, and
    /// returns whichever value ends up stored.
    pub(crate) fn insert(&mut self, a: &Surreal, b: &Surreal, value: Surreal) -> Surreal {
        self.entries.entry(Self::key(a, b)).or_insert(value).clone()
    }

    /// Replaces a raw result by the simplest equal value already stored.
    ///
    /// Entries are scanned in key order. For each stored value equal to
    /// `raw`, compared by [`Surreal::term_count`]:
    /// - stored is simpler or as simple: the stored value is returned and the
    ///   scan stops;
    /// - `raw` is simpler: the entry is overwritten with `raw` and the scan
    ///   continues.
    ///
    /// If no stored value is at least as simple, `raw` itself is returned.
    pub(crate) fn canonicalize(&mut self, raw: Surreal) -> Surreal {
        let raw_terms = raw.term_count();

        for stored in self.entries.values_mut() {
            if !order::eq(&raw, stored) {
                continue;
            }
            match raw_terms.cmp(&stored.term_count()) {
                Ordering::Less => {
                    debug!(
                        "Replacing stored {} ({} terms) with simpler form ({} terms)",
                        stored,
                        stored.term_count(),
                        raw_terms
                    );
                    *stored = raw.clone();
                    self.stats.rewrites += 1;
                }
                Ordering::Equal | Ordering::Greater => {
                    self.stats.reuses += 1;
                    return stored.clone();
                }
            }
        }

        raw
    }

    /// Number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(lhs, rhs, result)` with `lhs <= rhs`, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Surreal, &Surreal, &Surreal)> {
        self.entries.iter().map(|((a, b), v)| (a, b, v))
    }

    /// Usage counters.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = MemoStats::default();
    }
}
