//! # conway-core
//!
//! Finite surreal numbers for the Conway workspace.
//!
//! This crate provides:
//! - [`Surreal`]: immutable `{ L | R }` numbers with validated construction
//! - The recursive order relation ([`order`]) behind `==`, `<`, `<=`, ...
//! - Memoized addition and multiplication ([`ArithContext`])
//! - Exact conversion to `f64` and bisection from `f64`
//!
//! ## Representation
//!
//! Sets of numbers are ordered by the numeric order, so structurally
//! different but equal numbers are one set element. Arithmetic results are
//! canonicalized against the memo tables, which keeps `{ -1 | 1 }` from
//! piling up where `{ | }` would do.
//!
//! ## Limitations
//!
//! Float values and depths are cached per number, and deep comparisons
//! remember settled pairs, so numbers built by bisection from any `f64` stay
//! cheap to evaluate and compare. Multiplication is still very slow past
//! depth ten. Comparison recurses once per level; [`Surreal::from_f64`] and
//! [`Surreal::try_from_int`] refuse magnitudes above [`MAX_MAGNITUDE`] for
//! that reason. Dropping never recurses.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod display;
pub mod error;
pub mod float;
pub mod number;
pub mod ops;
pub mod order;

#[cfg(test)]
mod proptests;

pub use arith::{ArithConfig, ArithContext, MemoStats, MemoTable};
pub use display::format_approx;
pub use error::{Result, Side, SurrealError};
pub use number::{negate_set, NumberSet, Surreal, MAX_MAGNITUDE};
pub use ops::with_default_context;
