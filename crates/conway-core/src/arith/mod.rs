//! Memoized surreal arithmetic.
//!
//! - [`ArithContext`]: addition, subtraction and multiplication
//! - [`MemoTable`]: the per-operation result cache with canonicalization
//! - [`set_ops`]: the same operations lifted to sets of numbers

pub mod context;
pub mod memo;
pub mod set_ops;

pub use context::{ArithConfig, ArithContext};
pub use memo::{MemoStats, MemoTable};
