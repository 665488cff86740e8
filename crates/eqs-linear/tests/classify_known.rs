use eqs_core::Tolerance;
use eqs_linear::{LinearEquation, LinearKind, LinearOutcome, LinearSolver};

#[test]
fn classify_reference_cases() {
    let solver = LinearSolver::default();
    assert_eq!(solver.classify(&LinearEquation::new(0.0, 0.0)), LinearKind::Identity);
    assert_eq!(solver.classify(&LinearEquation::new(0.0, 5.0)), LinearKind::Contradiction);
    assert_eq!(solver.classify(&LinearEquation::new(2.0, 3.0)), LinearKind::UniqueSolution);
}

#[test]
fn near_zero_coefficients_count_as_zero() {
    let solver = LinearSolver::default();
    assert_eq!(
        solver.classify(&LinearEquation::new(1e-12, -1e-11)),
        LinearKind::Identity
    );
    assert_eq!(
        solver.classify(&LinearEquation::new(-5e-11, 1e-3)),
        LinearKind::Contradiction
    );
    assert_eq!(solver.solve(&LinearEquation::new(5e-11, 7.0)), None);
}

#[test]
fn solve_returns_negated_ratio() {
    let solver = LinearSolver::default();
    let eq = LinearEquation::new(2.0, -4.0);
    assert_eq!(solver.solve(&eq), Some(2.0));
    assert!(solver.verify(&eq, 2.0));
    assert!(!solver.verify(&eq, 2.001));
}

#[test]
fn solve_is_silent_on_identity_and_contradiction() {
    let solver = LinearSolver::default();
    assert_eq!(solver.solve(&LinearEquation::new(0.0, 0.0)), None);
    assert_eq!(solver.solve(&LinearEquation::new(0.0, 5.0)), None);
}

#[test]
fn outcome_distinguishes_degenerate_cases() {
    let solver = LinearSolver::default();
    assert_eq!(
        solver.solve_outcome(&LinearEquation::new(0.0, 0.0)),
        LinearOutcome::NoUniqueSolution { is_identity: true }
    );
    assert_eq!(
        solver.solve_outcome(&LinearEquation::new(0.0, 5.0)),
        LinearOutcome::NoUniqueSolution { is_identity: false }
    );
    assert_eq!(
        solver.solve_outcome(&LinearEquation::new(4.0, 2.0)),
        LinearOutcome::Unique { x: -0.5 }
    );
}

#[test]
fn custom_tolerance_widens_zero_band() {
    let solver = LinearSolver::new(Tolerance::new(1e-3).unwrap());
    let eq = LinearEquation::new(1e-4, 2.0);
    assert_eq!(solver.classify(&eq), LinearKind::Contradiction);
    assert_eq!(solver.solve(&eq), None);
    assert_eq!(LinearSolver::default().classify(&eq), LinearKind::UniqueSolution);
}

#[test]
fn descriptions_are_stable() {
    assert_eq!(
        LinearKind::Identity.description(),
        "Identity (0 = 0) - Infinite solutions"
    );
    assert_eq!(
        LinearKind::UniqueSolution.description(),
        "Linear equation with unique solution"
    );
}

#[test]
fn outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(LinearOutcome::Unique { x: 1.5 }).expect("serialize");
    assert_eq!(json["status"], "unique");
    assert_eq!(json["x"], 1.5);
    let json = serde_json::to_value(LinearOutcome::NoUniqueSolution { is_identity: false })
        .expect("serialize");
    assert_eq!(json["status"], "no_unique_solution");
    let decoded: LinearOutcome = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, LinearOutcome::NoUniqueSolution { is_identity: false });
}
