//! Canonical text rendering for polynomial terms.
//!
//! Saved reports and console output embed these strings verbatim, so the
//! rules here are part of the public contract.

use crate::tolerance::Tolerance;

/// Right-hand side appended to every rendered equation.
pub const EQUATION_SUFFIX: &str = " = 0";

/// Renders the leading term: bare `variable` for 1, `-variable` for -1,
/// otherwise the coefficient followed by the variable.
pub fn leading_term(coefficient: f64, variable: &str, tol: &Tolerance) -> String {
    if tol.is_near(coefficient, 1.0) {
        variable.to_string()
    } else if tol.is_near(coefficient, -1.0) {
        format!("-{variable}")
    } else {
        format!("{coefficient}{variable}")
    }
}

/// Renders a trailing term with an explicit sign and the absolute value.
///
/// Returns an empty string for zero of either sign (and NaN).
pub fn signed_term(coefficient: f64, variable: &str) -> String {
    if coefficient > 0.0 {
        format!(" + {coefficient}{variable}")
    } else if coefficient < 0.0 {
        format!(" - {}{variable}", coefficient.abs())
    } else {
        String::new()
    }
}
