//! Console rendering of solver reports with fixed-point precision.

use eqs_linear::{LinearEquation, LinearOutcome};
use eqs_quadratic::{QuadraticEquation, QuadraticSolution};

use crate::report::{LinearReport, QuadraticReport};

fn fixed(value: f64, precision: usize) -> String {
    // -b / 2a yields -0.0 for b = 0
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.precision$}")
}

fn check_line(ok: bool) -> &'static str {
    if ok {
        "✓ Correct"
    } else {
        "✗ Failed"
    }
}

/// Renders a linear report as console lines.
///
/// The `Solving:` line echoes the coefficients unformatted, ahead of the
/// canonical `Equation:` line.
pub fn linear_lines(report: &LinearReport, precision: usize) -> Vec<String> {
    let LinearEquation { a, b } = report.equation;
    let mut lines = vec![
        "=== Linear Equation Solver ===".to_string(),
        format!("Solving: {a}x + {b} = 0"),
        format!("Equation: {}", report.formatted),
        format!("Type: {}", report.kind.description()),
    ];
    match report.outcome {
        LinearOutcome::Unique { x } => {
            lines.push(format!("Solution: x = {}", fixed(x, precision)));
            lines.push(match report.verified {
                Some(true) => "✓ Verification: Solution is correct!".to_string(),
                _ => "✗ Verification: Solution verification failed!".to_string(),
            });
        }
        LinearOutcome::NoUniqueSolution { is_identity } => {
            lines.push("No unique solution exists.".to_string());
            lines.push("This occurs when a = 0:".to_string());
            lines.push(if is_identity {
                "- If b = 0: 0 = 0 (identity, infinite solutions)".to_string()
            } else {
                "- If b ≠ 0: 0 = b (contradiction, no solution)".to_string()
            });
        }
    }
    lines
}

/// Renders a quadratic report (and its linear fallback, if any).
pub fn quadratic_lines(report: &QuadraticReport, precision: usize) -> Vec<String> {
    let QuadraticEquation { a, b, c } = report.equation;
    let mut lines = vec![
        "=== Quadratic Equation Solver ===".to_string(),
        format!("Solving: {a}x² + {b}x + {c} = 0"),
        format!("Equation: {}", report.formatted),
    ];
    match &report.solution {
        QuadraticSolution::Degenerate { message } => {
            lines.push(format!("Error: {message}"));
        }
        QuadraticSolution::Solved(roots) => {
            lines.push(format!("Discriminant: {}", fixed(roots.discriminant, precision)));
            lines.push(format!("Nature of roots: {}", roots.nature.description()));
            if let Some((real, imaginary)) = roots.conjugate_pair() {
                let (re, im) = (fixed(real, precision), fixed(imaginary, precision));
                lines.push("Complex roots:".to_string());
                lines.push(format!("  x₁ = {re} + {im}i"));
                lines.push(format!("  x₂ = {re} - {im}i"));
            } else {
                lines.push("Roots:".to_string());
                lines.push(format!("  x₁ = {}", fixed(roots.root1, precision)));
                lines.push(format!("  x₂ = {}", fixed(roots.root2, precision)));
            }
        }
    }
    if let Some(check) = report.verification {
        lines.push("Verification:".to_string());
        lines.push(format!("  x₁ verification: {}", check_line(check.root1)));
        lines.push(format!("  x₂ verification: {}", check_line(check.root2)));
    }
    if let Some(linear) = &report.linear_fallback {
        lines.push("Solving b·x + c = 0 with the linear solver instead.".to_string());
        lines.extend(linear_lines(linear, precision));
    }
    lines
}
