//! # Conway
//!
//! John Conway's surreal numbers, built from nothing but sets.
//!
//! Every number is a pair of sets `{ L | R }` of earlier numbers, with every
//! element of `R` greater than every element of `L`. Starting from
//! `0 = { | }` this generates the integers, the dyadic rationals and, with
//! infinite sides, ordinals such as `omega = { 0, 1, 2, ... | }`.
//!
//! ## Features
//!
//! - **Finite numbers**: [`Surreal`](conway_core::Surreal) with recursive
//!   order, negation, memoized addition and multiplication
//! - **Float bridge**: exact evaluation to `f64` and bisection from `f64`
//! - **Transfinite numbers**: lazily generated, cached sides via
//!   [`TransfiniteNumber`](conway_transfinite::TransfiniteNumber)
//!
//! ## Quick Start
//!
//! ```rust
//! use conway::prelude::*;
//!
//! let half = Surreal::pair(&Surreal::zero(), &Surreal::one()).unwrap();
//! assert_eq!(half.to_f64(), 0.5);
//!
//! let three = Surreal::from(3);
//! assert_eq!((&three * &half).to_f64(), 1.5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use conway_core as core;
pub use conway_transfinite as transfinite;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use conway_core::{
        with_default_context, ArithConfig, ArithContext, NumberSet, Side, Surreal, SurrealError,
    };
    pub use conway_transfinite::{Extent, GeneratedSet, Generator, TransfiniteNumber};
    pub use num_traits::{One, Zero};
}
