use eqs_core::Tolerance;
use serde::{Deserialize, Serialize};

use crate::equation::LinearEquation;

/// Solution structure of a linear equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinearKind {
    /// `0 = 0`: every real number is a solution.
    Identity,
    /// `0 = b` with `b ≠ 0`: no real number is a solution.
    Contradiction,
    /// Exactly one solution `x = -b / a`.
    UniqueSolution,
}

impl LinearKind {
    /// Human readable label used by console output and saved reports.
    pub fn description(&self) -> &'static str {
        match self {
            LinearKind::Identity => "Identity (0 = 0) - Infinite solutions",
            LinearKind::Contradiction => "Contradiction (0 = b, b ≠ 0) - No solution",
            LinearKind::UniqueSolution => "Linear equation with unique solution",
        }
    }
}

/// Single-call outcome that separates identity from contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LinearOutcome {
    /// The unique root.
    Unique {
        /// Value of `x` satisfying the equation.
        x: f64,
    },
    /// `a ≈ 0`: either every real is a solution or none is.
    NoUniqueSolution {
        /// `true` for the identity `0 = 0`, `false` for a contradiction.
        is_identity: bool,
    },
}

/// Classifies, solves and verifies linear equations under a fixed tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearSolver {
    tolerance: Tolerance,
}

impl LinearSolver {
    /// Creates a solver using the supplied tolerance for every decision.
    pub const fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Returns the tolerance used by this solver.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Determines whether the equation is an identity, a contradiction or
    /// has a unique solution.
    pub fn classify(&self, eq: &LinearEquation) -> LinearKind {
        match (
            self.tolerance.is_near_zero(eq.a),
            self.tolerance.is_near_zero(eq.b),
        ) {
            (true, true) => LinearKind::Identity,
            (true, false) => LinearKind::Contradiction,
            (false, _) => LinearKind::UniqueSolution,
        }
    }

    /// Returns `-b / a`, or `None` when `a` is near zero.
    ///
    /// `None` covers both the identity and the contradiction; use
    /// [`LinearSolver::classify`] or [`LinearSolver::solve_outcome`] to tell
    /// them apart.
    pub fn solve(&self, eq: &LinearEquation) -> Option<f64> {
        if self.tolerance.is_near_zero(eq.a) {
            return None;
        }
        Some(-eq.b / eq.a)
    }

    /// Solves and classifies in one call.
    pub fn solve_outcome(&self, eq: &LinearEquation) -> LinearOutcome {
        match self.solve(eq) {
            Some(x) => LinearOutcome::Unique { x },
            None => LinearOutcome::NoUniqueSolution {
                is_identity: self.classify(eq) == LinearKind::Identity,
            },
        }
    }

    /// Substitutes `x` back into the equation and checks the residual.
    pub fn verify(&self, eq: &LinearEquation, x: f64) -> bool {
        self.tolerance.is_near_zero(eq.evaluate(x))
    }

    /// Renders the equation in canonical form under this solver's tolerance.
    pub fn format(&self, eq: &LinearEquation) -> String {
        eq.format_with(&self.tolerance)
    }
}
