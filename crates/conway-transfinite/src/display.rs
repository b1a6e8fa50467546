//! Text rendering of transfinite numbers.
//!
//! Finite sides are printed in full. An unbounded side shows its first
//! `width` elements and an ellipsis: `{ 0 1 2 ... | }` for the left side,
//! `{ | ... 0.25 0.5 1 }` for the right side, which is listed in ascending
//! order.

use std::fmt;

use conway_core::{format_approx, Result, Side, SurrealError};

use crate::generator::Extent;
use crate::number::TransfiniteNumber;

/// Number of elements shown for an unbounded side by `Display`.
pub const DEFAULT_WIDTH: usize = 5;

/// How elements are rendered inside the braces.
#[derive(Clone, Copy)]
enum Style {
    /// Recurse `depth` more levels, then fall back to floats.
    Hybrid { depth: usize },
    /// Braces and bars only.
    Verbose,
}

impl TransfiniteNumber {
    /// Renders the number down to `depth` levels of braces, showing deeper
    /// elements as float approximations and at most `width` elements of an
    /// unbounded side.
    ///
    /// An element without a float value (because it is unbounded itself) is
    /// shown as `NaN`.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator is asked for an index it cannot
    /// produce, or if an element's generators break their ordering contract.
    pub fn print(&self, width: usize, depth: usize) -> Result<String> {
        self.render(width, Style::Hybrid { depth })
    }

    /// Renders the structure with braces and bars only, showing at most
    /// `width` elements of each unbounded side.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator is asked for an index it cannot
    /// produce.
    pub fn print_verbose(&self, width: usize) -> Result<String> {
        self.render(width, Style::Verbose)
    }

    fn render(&self, width: usize, style: Style) -> Result<String> {
        let mut out = String::from("{ ");

        match self.left_extent() {
            Extent::Finite(len) => {
                for i in 0..len {
                    self.push_element(Side::Left, i, width, style, &mut out)?;
                }
            }
            Extent::Unbounded if width > 0 => {
                for i in 0..width {
                    self.push_element(Side::Left, i, width, style, &mut out)?;
                }
                out.push_str("... ");
            }
            Extent::Unbounded => {}
        }

        out.push_str("| ");

        match self.right_extent() {
            Extent::Finite(len) => {
                for i in (0..len).rev() {
                    self.push_element(Side::Right, i, width, style, &mut out)?;
                }
            }
            Extent::Unbounded if width > 0 => {
                out.push_str("... ");
                for i in (0..width).rev() {
                    self.push_element(Side::Right, i, width, style, &mut out)?;
                }
            }
            Extent::Unbounded => {}
        }

        out.push('}');
        Ok(out)
    }

    fn push_element(
        &self,
        side: Side,
        index: usize,
        width: usize,
        style: Style,
        out: &mut String,
    ) -> Result<()> {
        let elem = match side {
            Side::Left => self.get_left(index)?,
            Side::Right => self.get_right(index)?,
        };
        let text = match style {
            Style::Hybrid { depth: 0 } => match elem.to_f64() {
                Ok(value) => format_approx(value),
                Err(SurrealError::UnboundedSet { .. }) => format_approx(f64::NAN),
                Err(err) => return Err(err),
            },
            Style::Hybrid { depth } => elem.print(width, depth - 1)?,
            Style::Verbose => elem.print_verbose(width)?,
        };
        out.push_str(&text);
        out.push(' ');
        Ok(())
    }
}

impl fmt::Display for TransfiniteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.print(DEFAULT_WIDTH, 0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
