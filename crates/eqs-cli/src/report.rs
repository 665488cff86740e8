//! Serializable solver reports and their persistence.

use std::fs;
use std::path::Path;

use eqs_core::{EqsError, ErrorInfo, SchemaVersion};
use eqs_linear::{LinearEquation, LinearKind, LinearOutcome, LinearSolver};
use eqs_quadratic::{QuadraticEquation, QuadraticSolution, QuadraticSolver};
use serde::{Deserialize, Serialize};

/// Schema version stamped on every report.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Everything known about one linear equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearReport {
    /// Report layout version.
    pub schema_version: SchemaVersion,
    /// Coefficients as supplied.
    pub equation: LinearEquation,
    /// Canonical text of the equation.
    pub formatted: String,
    /// Identity, contradiction or unique solution.
    pub kind: LinearKind,
    /// Root, or which degenerate case applies.
    pub outcome: LinearOutcome,
    /// Re-substitution check, present only for a unique root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl LinearReport {
    /// Classifies, solves and verifies `equation` with `solver`.
    pub fn build(solver: &LinearSolver, equation: LinearEquation) -> Self {
        let outcome = solver.solve_outcome(&equation);
        let verified = match outcome {
            LinearOutcome::Unique { x } => Some(solver.verify(&equation, x)),
            LinearOutcome::NoUniqueSolution { .. } => None,
        };
        Self {
            schema_version: REPORT_SCHEMA,
            equation,
            formatted: solver.format(&equation),
            kind: solver.classify(&equation),
            outcome,
            verified,
        }
    }
}

/// Verification flags for the two real roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootVerification {
    /// Residual check of the plus-branch root.
    pub root1: bool,
    /// Residual check of the minus-branch root.
    pub root2: bool,
}

/// Everything known about one quadratic equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadraticReport {
    /// Report layout version.
    pub schema_version: SchemaVersion,
    /// Coefficients as supplied.
    pub equation: QuadraticEquation,
    /// Canonical text of the equation.
    pub formatted: String,
    /// Roots, or the degenerate explanation.
    pub solution: QuadraticSolution,
    /// Absent for complex and degenerate outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<RootVerification>,
    /// Linear solve of `b·x + c = 0` when a degenerate quadratic fell back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linear_fallback: Option<LinearReport>,
}

impl QuadraticReport {
    /// Solves `equation` and verifies its real roots, if any.
    pub fn build(solver: &QuadraticSolver, equation: QuadraticEquation) -> Self {
        let solution = solver.solve(&equation);
        let verification = solution
            .roots()
            .and_then(|roots| solver.verify_roots(&equation, roots))
            .map(|(root1, root2)| RootVerification { root1, root2 });
        Self {
            schema_version: REPORT_SCHEMA,
            equation,
            formatted: solver.format(&equation),
            solution,
            verification,
            linear_fallback: None,
        }
    }

    /// Attaches the linear solve of the remaining `b·x + c = 0`.
    pub fn with_linear_fallback(mut self, solver: &LinearSolver) -> Self {
        let (b, c) = self.equation.as_linear_tail();
        self.linear_fallback = Some(LinearReport::build(solver, LinearEquation::new(b, c)));
        self
    }
}

/// Writes `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), EqsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| EqsError::io("report-dir", parent, err))?;
        }
    }
    let json = to_json(value)?;
    fs::write(path, json).map_err(|err| EqsError::io("report-write", path, err))
}

/// Renders `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, EqsError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| EqsError::Serde(ErrorInfo::new("report-encode", err.to_string())))
}

#[cfg(test)]
mod tests {
    use eqs_quadratic::QuadraticSolver;

    use super::*;

    #[test]
    fn linear_verification_only_for_unique_root() {
        let solver = LinearSolver::default();
        let unique = LinearReport::build(&solver, LinearEquation::new(4.0, 2.0));
        assert_eq!(unique.verified, Some(true));
        assert_eq!(unique.formatted, "4x + 2 = 0");

        let identity = LinearReport::build(&solver, LinearEquation::new(0.0, 0.0));
        assert_eq!(identity.verified, None);
        let json = to_json(&identity).expect("encode");
        assert!(!json.contains("\"verified\""));
        assert!(json.contains("\"schema_version\""));
    }

    #[test]
    fn quadratic_verification_skipped_for_complex_roots() {
        let solver = QuadraticSolver::default();
        let real = QuadraticReport::build(&solver, QuadraticEquation::new(1.0, -3.0, 2.0));
        assert_eq!(real.verification, Some(RootVerification { root1: true, root2: true }));
        assert_eq!(real.linear_fallback, None);

        let complex = QuadraticReport::build(&solver, QuadraticEquation::new(1.0, 0.0, 4.0));
        assert_eq!(complex.verification, None);
        let json = to_json(&complex).expect("encode");
        assert!(!json.contains("\"verification\""));
        assert!(!json.contains("\"linear_fallback\""));
    }
}
