use std::fmt;

use eqs_core::{leading_term, signed_term, Tolerance, EQUATION_SUFFIX};
use serde::{Deserialize, Serialize};

/// The equation `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticEquation {
    /// Coefficient of `x²`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl QuadraticEquation {
    /// Creates the equation `a·x² + b·x + c = 0`.
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates the left-hand side at a real `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Coefficients `(b, c)` of the linear equation `b·x + c = 0` left over
    /// when the leading coefficient vanishes.
    pub fn as_linear_tail(&self) -> (f64, f64) {
        (self.b, self.c)
    }

    /// Renders the canonical form, e.g. `x² - 3x + 2 = 0`.
    ///
    /// Near-zero `b` and `c` terms are dropped entirely.
    pub fn format_with(&self, tol: &Tolerance) -> String {
        let mut rendered = leading_term(self.a, "x²", tol);
        if !tol.is_near_zero(self.b) {
            rendered.push_str(&signed_term(self.b, "x"));
        }
        if !tol.is_near_zero(self.c) {
            rendered.push_str(&signed_term(self.c, ""));
        }
        rendered.push_str(EQUATION_SUFFIX);
        rendered
    }
}

impl fmt::Display for QuadraticEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&Tolerance::default()))
    }
}
