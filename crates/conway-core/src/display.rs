//! Text rendering of finite surreal numbers.

use std::fmt;

use crate::number::{NumberSet, Surreal};

/// Formats an approximation the way element values are shown in braces.
#[must_use]
pub fn format_approx(value: f64) -> String {
    format!("{value:.6}")
}

impl Surreal {
    /// Renders the number with braces down to `depth` levels, replacing
    /// deeper elements by their float approximation.
    ///
    /// At depth 0 only the outermost braces are written:
    /// `Surreal::from(2).print(0)` is `{ 1.000000 | }`.
    #[must_use]
    pub fn print(&self, depth: usize) -> String {
        let mut out = String::from("{ ");
        Self::print_set(self.left(), depth, &mut out);
        out.push_str("| ");
        Self::print_set(self.right(), depth, &mut out);
        out.push('}');
        out
    }

    fn print_set(set: &NumberSet, depth: usize, out: &mut String) {
        for elem in set {
            if depth > 0 {
                out.push_str(&elem.print(depth - 1));
            } else {
                out.push_str(&format_approx(elem.to_f64()));
            }
            out.push(' ');
        }
    }

    /// Renders the full structure using only braces and bars.
    #[must_use]
    pub fn print_verbose(&self) -> String {
        let mut out = String::from("{ ");
        for elem in self.left() {
            out.push_str(&elem.print_verbose());
            out.push(' ');
        }
        out.push_str("| ");
        for elem in self.right() {
            out.push_str(&elem.print_verbose());
            out.push(' ');
        }
        out.push('}');
        out
    }
}

impl fmt::Display for Surreal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print(0))
    }
}

impl fmt::Debug for Surreal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surreal({})", self.to_f64())
    }
}
