use std::fmt;

use eqs_core::{leading_term, signed_term, Tolerance, EQUATION_SUFFIX};
use serde::{Deserialize, Serialize};

/// The equation `a·x + b = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearEquation {
    /// Coefficient of `x`.
    pub a: f64,
    /// Constant term.
    pub b: f64,
}

impl LinearEquation {
    /// Creates the equation `a·x + b = 0`.
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Evaluates the left-hand side at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x + self.b
    }

    /// Renders the canonical form, e.g. `2x - 4 = 0` or `-x + 1.5 = 0`.
    pub fn format_with(&self, tol: &Tolerance) -> String {
        let mut rendered = leading_term(self.a, "x", tol);
        rendered.push_str(&signed_term(self.b, ""));
        rendered.push_str(EQUATION_SUFFIX);
        rendered
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&Tolerance::default()))
    }
}
