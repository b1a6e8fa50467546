//! # conway-transfinite
//!
//! Surreal numbers with possibly infinite sides.
//!
//! A [`TransfiniteNumber`] holds two [`GeneratedSet`]s. Each side is a
//! [`Generator`] plus an [`Extent`]; elements are produced on first access
//! and cached, so `omega = { 0, 1, 2, ... | }` costs nothing until someone
//! looks at it.
//!
//! Finite numbers wrap losslessly ([`TransfiniteNumber::from_finite`]) and
//! project back ([`TransfiniteNumber::to_finite`]). Projecting a number with
//! an unbounded side fails with [`conway_core::SurrealError::UnboundedSet`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod generator;
pub mod number;
pub mod projection;

pub use display::DEFAULT_WIDTH;
pub use generator::{Extent, GeneratedSet, Generator};
pub use number::TransfiniteNumber;
