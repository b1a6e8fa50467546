//! Addition and multiplication lifted to sets of numbers.
//!
//! `X + y` adds `y` to every element of `X`; `X + Y` takes every pairwise
//! sum. Products work the same way. Results are collected into a
//! [`NumberSet`], so numerically equal outcomes collapse to one element.

use crate::arith::ArithContext;
use crate::number::{NumberSet, Surreal};

/// `X + y`.
pub fn add_set_num(ctx: &mut ArithContext, set: &NumberSet, num: &Surreal) -> NumberSet {
    set.iter().map(|elem| ctx.add(elem, num)).collect()
}

/// `X + Y` over the cross product.
pub fn add_sets(ctx: &mut ArithContext, lhs: &NumberSet, rhs: &NumberSet) -> NumberSet {
    let mut out = NumberSet::new();
    for a in lhs {
        for b in rhs {
            out.insert(ctx.add(a, b));
        }
    }
    out
}

/// `X * y`.
pub fn mul_set_num(ctx: &mut ArithContext, set: &NumberSet, num: &Surreal) -> NumberSet {
    set.iter().map(|elem| ctx.mul(elem, num)).collect()
}

/// `X * Y` over the cross product.
pub fn mul_sets(ctx: &mut ArithContext, lhs: &NumberSet, rhs: &NumberSet) -> NumberSet {
    let mut out = NumberSet::new();
    for a in lhs {
        for b in rhs {
            out.insert(ctx.mul(a, b));
        }
    }
    out
}
