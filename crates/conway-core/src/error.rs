//! Error types shared by finite and transfinite surreal numbers.

use std::fmt;

use thiserror::Error;

/// One of the two defining sets of a surreal number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left set `L` in `{ L | R }`.
    Left,
    /// The right set `R` in `{ L | R }`.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Errors that can occur while building or projecting surreal numbers.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SurrealError {
    /// Some right element is `<=` some left element (a pseudo-number), or a
    /// pair constructor got `left >= right`.
    ///
    /// The fields hold float approximations of the offending elements.
    #[error("invalid construction: right element {right} is not greater than left element {left}")]
    InvalidConstruction {
        /// Approximate value of the offending left element.
        left: f64,
        /// Approximate value of the offending right element.
        right: f64,
    },

    /// A transfinite number with an unbounded side cannot be projected to a
    /// finite one.
    #[error("cannot project an unbounded {side} set to a finite number")]
    UnboundedSet {
        /// The side that turned out to be unbounded.
        side: Side,
    },

    /// An element was requested past the end of a finite generated set.
    #[error("index {index} is out of range for a {side} set of {len} elements")]
    IndexOutOfRange {
        /// The side that was queried.
        side: Side,
        /// The requested index.
        index: usize,
        /// The number of elements on that side.
        len: usize,
    },

    /// The float cannot be turned into a finite surreal number.
    #[error("cannot represent {0} as a finite surreal number")]
    Unrepresentable(f64),

    /// A number would be too deep to build or combine: checked arithmetic
    /// on deep operands, or a checked integer of large magnitude.
    #[error("depth {depth} exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// Depth of the number, or combined depth of the operands.
        depth: usize,
        /// The configured limit.
        limit: usize,
    },
}

/// Result alias used throughout the surreal crates.
pub type Result<T> = std::result::Result<T, SurrealError>;
