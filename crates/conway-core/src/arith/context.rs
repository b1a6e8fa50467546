//! The arithmetic context: memoized addition and multiplication.

use tracing::trace;

use crate::arith::memo::MemoTable;
use crate::arith::set_ops::{add_set_num, add_sets, mul_set_num, mul_sets};
use crate::error::{Result, SurrealError};
use crate::number::{negate_set, NumberSet, Surreal};

/// Configuration for an [`ArithContext`].
#[derive(Clone, Debug)]
pub struct ArithConfig {
    /// Replace fresh results by simpler equal values found in the memo table.
    pub canonicalize: bool,
    /// Largest combined operand depth accepted by the `checked_*` operations.
    /// `None` disables the check.
    pub depth_limit: Option<usize>,
}

impl Default for ArithConfig {
    fn default() -> Self {
        Self {
            canonicalize: true,
            depth_limit: Some(64),
        }
    }
}

/// Owns the addition and multiplication memo tables.
///
/// Every operation follows the same steps: look the unordered operand pair
/// up, otherwise compute Conway's recursive formula, canonicalize the raw
/// result against the table, then store it.
///
/// A context is meant for one thread. The tables only grow; call
/// [`ArithContext::clear`] to start over.
#[derive(Clone, Debug, Default)]
pub struct ArithContext {
    config: ArithConfig,
    add_table: MemoTable,
    mul_table: MemoTable,
}

impl ArithContext {
    /// Creates a context with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with a custom configuration.
    #[must_use]
    pub fn with_config(config: ArithConfig) -> Self {
        Self {
            config,
            add_table: MemoTable::new(),
            mul_table: MemoTable::new(),
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ArithConfig {
        &self.config
    }

    /// The addition memo table.
    #[must_use]
    pub fn add_table(&self) -> &MemoTable {
        &self.add_table
    }

    /// The multiplication memo table.
    #[must_use]
    pub fn mul_table(&self) -> &MemoTable {
        &self.mul_table
    }

    /// Empties both memo tables.
    pub fn clear(&mut self) {
        self.add_table.clear();
        self.mul_table.clear();
    }

    /// Computes `a + b = { L(a)+b, L(b)+a | R(a)+b, R(b)+a }`.
    pub fn add(&mut self, a: &Surreal, b: &Surreal) -> Surreal {
        if let Some(hit) = self.add_table.lookup(a, b) {
            return hit;
        }
        trace!(
            "add miss: {} + {} ({} entries)",
            a.to_f64(),
            b.to_f64(),
            self.add_table.len()
        );

        let mut left = add_set_num(self, a.left(), b);
        left.extend(add_set_num(self, b.left(), a));
        let mut right = add_set_num(self, a.right(), b);
        right.extend(add_set_num(self, b.right(), a));

        let raw = Surreal::from_parts(left, right);
        let result = if self.config.canonicalize {
            self.add_table.canonicalize(raw)
        } else {
            raw
        };
        self.add_table.insert(a, b, result)
    }

    /// Computes `a - b` as `a + (-b)`.
    pub fn sub(&mut self, a: &Surreal, b: &Surreal) -> Surreal {
        self.add(a, &b.negate())
    }

    /// Computes `a * b`.
    ///
    /// ```text
    /// a*b = { L(a)*b + a*L(b) - L(a)*L(b),  R(a)*b + a*R(b) - R(a)*R(b)
    ///       | L(a)*b + a*R(b) - L(a)*R(b),  R(a)*b + a*L(b) - R(a)*L(b) }
    /// ```
    ///
    /// Cost grows combinatorially with depth; operands deeper than about ten
    /// levels are very slow.
    pub fn mul(&mut self, a: &Surreal, b: &Surreal) -> Surreal {
        if let Some(hit) = self.mul_table.lookup(a, b) {
            return hit;
        }
        trace!(
            "mul miss: {} * {} ({} entries)",
            a.to_f64(),
            b.to_f64(),
            self.mul_table.len()
        );

        let al_b = mul_set_num(self, a.left(), b);
        let ar_b = mul_set_num(self, a.right(), b);
        let bl_a = mul_set_num(self, b.left(), a);
        let br_a = mul_set_num(self, b.right(), a);

        let neg_al_bl = negate_set(&mul_sets(self, a.left(), b.left()));
        let neg_ar_br = negate_set(&mul_sets(self, a.right(), b.right()));
        let neg_al_br = negate_set(&mul_sets(self, a.left(), b.right()));
        let neg_ar_bl = negate_set(&mul_sets(self, a.right(), b.left()));

        let mut left = self.sum3(&al_b, &bl_a, &neg_al_bl);
        left.extend(self.sum3(&ar_b, &br_a, &neg_ar_br));
        let mut right = self.sum3(&al_b, &br_a, &neg_al_br);
        right.extend(self.sum3(&ar_b, &bl_a, &neg_ar_bl));

        let raw = Surreal::from_parts(left, right);
        let result = if self.config.canonicalize {
            self.mul_table.canonicalize(raw)
        } else {
            raw
        };
        self.mul_table.insert(a, b, result)
    }

    /// `X + Y + Z` over the cross product.
    fn sum3(&mut self, x: &NumberSet, y: &NumberSet, z: &NumberSet) -> NumberSet {
        let xy = add_sets(self, x, y);
        add_sets(self, &xy, z)
    }

    /// [`ArithContext::add`] guarded by the configured depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::DepthLimitExceeded`] if the combined depth of
    /// the operands is over the limit.
    pub fn checked_add(&mut self, a: &Surreal, b: &Surreal) -> Result<Surreal> {
        self.check_depth(a, b)?;
        Ok(self.add(a, b))
    }

    /// [`ArithContext::sub`] guarded by the configured depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::DepthLimitExceeded`] if the combined depth of
    /// the operands is over the limit.
    pub fn checked_sub(&mut self, a: &Surreal, b: &Surreal) -> Result<Surreal> {
        self.check_depth(a, b)?;
        Ok(self.sub(a, b))
    }

    /// [`ArithContext::mul`] guarded by the configured depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`SurrealError::DepthLimitExceeded`] if the combined depth of
    /// the operands is over the limit.
    pub fn checked_mul(&mut self, a: &Surreal, b: &Surreal) -> Result<Surreal> {
        self.check_depth(a, b)?;
        Ok(self.mul(a, b))
    }

    fn check_depth(&self, a: &Surreal, b: &Surreal) -> Result<()> {
        let Some(limit) = self.config.depth_limit else {
            return Ok(());
        };
        let depth = a.depth() + b.depth();
        if depth > limit {
            return Err(SurrealError::DepthLimitExceeded { depth, limit });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_add_integers() {
        let mut ctx = ArithContext::new();
        for a in -3..=3 {
            for b in -3..=3 {
                let sum = ctx.add(&Surreal::from(a), &Surreal::from(b));
                assert_eq!(sum, Surreal::from(a + b), "{a} + {b}");
            }
        }
    }

    #[test]
    fn test_add_commutes_and_shares_entry() {
        let mut ctx = ArithContext::new();
        let a = Surreal::from(2);
        let b = Surreal::from_f64(-0.75).unwrap();

        let ab = ctx.add(&a, &b);
        let ba = ctx.add(&b, &a);
        assert!(Surreal::ptr_eq(&ab, &ba));
        assert!(Surreal::ptr_eq(
            ctx.add_table().get(&a, &b).unwrap(),
            ctx.add_table().get(&b, &a).unwrap()
        ));
        assert_eq!(ab.to_f64(), 1.25);
    }

    #[test]
    fn test_inverse_collapses_to_zero() {
        let mut ctx = ArithContext::new();
        let one = Surreal::one();
        let sum = ctx.add(&one, &one.negate());

        assert_eq!(sum, Surreal::zero());
        assert_eq!(sum.term_count(), 0);
        assert!(ctx.add_table().stats().reuses > 0);
    }

    #[test]
    fn test_without_canonicalization() {
        let mut ctx = ArithContext::with_config(ArithConfig {
            canonicalize: false,
            ..ArithConfig::default()
        });
        let one = Surreal::one();
        let sum = ctx.add(&one, &one.negate());

        assert_eq!(sum, Surreal::zero());
        assert_eq!(sum.term_count(), 2);
    }

    #[test]
    fn test_sub() {
        let mut ctx = ArithContext::new();
        let half = Surreal::from_f64(0.5).unwrap();
        let diff = ctx.sub(&Surreal::from(2), &half);
        assert_eq!(diff.to_f64(), 1.5);
    }

    #[test]
    fn test_mul_integers() {
        let mut ctx = ArithContext::new();
        for a in -2..=3 {
            for b in -2..=3 {
                let product = ctx.mul(&Surreal::from(a), &Surreal::from(b));
                assert_eq!(product, Surreal::from(a * b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_mul_fractions() {
        let mut ctx = ArithContext::new();
        let half = Surreal::from_f64(0.5).unwrap();
        let quarter = ctx.mul(&half, &half);
        assert_eq!(quarter.to_f64(), 0.25);

        let product = ctx.mul(&Surreal::from(3), &half);
        assert_eq!(product.to_f64(), 1.5);
    }

    #[test]
    fn test_depth_limit() {
        let mut ctx = ArithContext::with_config(ArithConfig {
            depth_limit: Some(5),
            ..ArithConfig::default()
        });
        let three = Surreal::from(3);

        assert!(ctx.checked_add(&three, &Surreal::from(2)).is_ok());
        assert_eq!(
            ctx.checked_mul(&three, &three),
            Err(SurrealError::DepthLimitExceeded { depth: 6, limit: 5 })
        );
        assert!(ctx.checked_sub(&three, &three).is_err());
        assert!(ctx.mul_table().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut ctx = ArithContext::new();
        ctx.mul(&Surreal::from(2), &Surreal::from(2));
        assert!(!ctx.add_table().is_empty());
        assert!(!ctx.mul_table().is_empty());

        ctx.clear();
        assert!(ctx.add_table().is_empty());
        assert!(ctx.mul_table().is_empty());
    }
}
