use eqs_quadratic::{
    discriminant, QuadraticEquation, QuadraticSolution, QuadraticSolver, RootNature,
    DEGENERATE_MESSAGE,
};

fn solved(a: f64, b: f64, c: f64) -> eqs_quadratic::QuadraticRoots {
    let solution = QuadraticSolver::default().solve(&QuadraticEquation::new(a, b, c));
    *solution.roots().expect("quadratic should be solvable")
}

#[test]
fn distinct_roots_are_ordered_plus_branch_first() {
    assert_eq!(discriminant(1.0, -3.0, 2.0), 1.0);
    let roots = solved(1.0, -3.0, 2.0);
    assert_eq!(roots.nature, RootNature::RealDistinct);
    assert_eq!(roots.root1, 2.0);
    assert_eq!(roots.root2, 1.0);
    assert_eq!(roots.imaginary_part, 0.0);
    assert_eq!(roots.discriminant, 1.0);
}

#[test]
fn negative_leading_coefficient_keeps_formula_order() {
    // -x² + 3x - 2 = 0 has roots 1 and 2; the plus branch divides by -2.
    let roots = solved(-1.0, 3.0, -2.0);
    assert_eq!(roots.nature, RootNature::RealDistinct);
    assert_eq!(roots.root1, 1.0);
    assert_eq!(roots.root2, 2.0);
}

#[test]
fn repeated_root() {
    let roots = solved(1.0, -2.0, 1.0);
    assert_eq!(roots.nature, RootNature::RealEqual);
    assert_eq!(roots.discriminant, 0.0);
    assert_eq!(roots.root1, 1.0);
    assert_eq!(roots.root2, 1.0);
    assert_eq!(roots.imaginary_part, 0.0);
}

#[test]
fn complex_conjugate_pair() {
    let roots = solved(1.0, 0.0, 1.0);
    assert_eq!(roots.nature, RootNature::Complex);
    assert_eq!(roots.discriminant, -4.0);
    assert_eq!(roots.root1, 0.0);
    assert_eq!(roots.root1, roots.root2);
    assert_eq!(roots.imaginary_part, 1.0);
    assert_eq!(roots.conjugate_pair(), Some((0.0, 1.0)));
    assert_eq!(roots.real_roots(), None);
}

#[test]
fn complex_imaginary_part_is_a_magnitude() {
    // -2x² + 4x - 4 = 0 → 1 ± i
    let roots = solved(-2.0, 4.0, -4.0);
    assert_eq!(roots.nature, RootNature::Complex);
    assert_eq!(roots.root1, 1.0);
    assert_eq!(roots.imaginary_part, 1.0);
}

#[test]
fn degenerate_leading_coefficient() {
    let solution = QuadraticSolver::default().solve(&QuadraticEquation::new(0.0, 2.0, 3.0));
    assert!(!solution.is_valid());
    assert_eq!(solution.error_message(), Some(DEGENERATE_MESSAGE));
    assert!(solution.roots().is_none());

    let tiny = QuadraticSolver::default().solve(&QuadraticEquation::new(1e-12, 2.0, 3.0));
    assert!(matches!(tiny, QuadraticSolution::Degenerate { .. }));
}

#[test]
fn linear_tail_exposes_remaining_coefficients() {
    assert_eq!(QuadraticEquation::new(0.0, 2.0, 3.0).as_linear_tail(), (2.0, 3.0));
}

#[test]
fn near_zero_discriminant_is_real_equal() {
    let solver = QuadraticSolver::default();
    assert_eq!(solver.classify_root_nature(-1e-12), RootNature::RealEqual);
    assert_eq!(solver.classify_root_nature(1e-12), RootNature::RealEqual);
    assert_eq!(solver.classify_root_nature(-1e-9), RootNature::Complex);
    assert_eq!(solver.classify_root_nature(1e-9), RootNature::RealDistinct);
}

#[test]
fn slightly_negative_discriminant_solves_as_repeated_root() {
    // Δ = 4 - 4·(1 + 1e-13) ≈ -4e-13
    let roots = solved(1.0, 2.0, 1.0 + 1e-13);
    assert!(roots.discriminant < 0.0);
    assert_eq!(roots.nature, RootNature::RealEqual);
    assert_eq!(roots.root1, -1.0);
    assert_eq!(roots.imaginary_part, 0.0);
}

#[test]
fn verification_of_real_roots() {
    let solver = QuadraticSolver::default();
    let eq = QuadraticEquation::new(2.0, -10.0, 12.0);
    let roots = *solver.solve(&eq).roots().expect("roots");
    assert_eq!(solver.verify_roots(&eq, &roots), Some((true, true)));
    assert!(!solver.verify(&eq, 2.5));
}

#[test]
fn complex_roots_are_excluded_from_verification() {
    let solver = QuadraticSolver::default();
    let eq = QuadraticEquation::new(1.0, 0.0, 1.0);
    let roots = *solver.solve(&eq).roots().expect("roots");
    assert_eq!(solver.verify_roots(&eq, &roots), None);
}

#[test]
fn solve_is_idempotent() {
    let solver = QuadraticSolver::default();
    for eq in [
        QuadraticEquation::new(1.0, -3.0, 2.0),
        QuadraticEquation::new(3.0, 1.0, 7.0),
        QuadraticEquation::new(0.5, 0.1, -0.3),
    ] {
        let first = solver.solve(&eq);
        let second = solver.solve(&eq);
        let (a, b) = (first.roots().unwrap(), second.roots().unwrap());
        assert_eq!(a.root1.to_bits(), b.root1.to_bits());
        assert_eq!(a.root2.to_bits(), b.root2.to_bits());
        assert_eq!(a.imaginary_part.to_bits(), b.imaginary_part.to_bits());
        assert_eq!(a.discriminant.to_bits(), b.discriminant.to_bits());
        assert_eq!(a.nature, b.nature);
    }
}

#[test]
fn solution_serializes_with_status_tag() {
    let solution = QuadraticSolver::default().solve(&QuadraticEquation::new(1.0, -3.0, 2.0));
    let json = serde_json::to_value(&solution).expect("serialize");
    assert_eq!(json["status"], "solved");
    assert_eq!(json["nature"], "real_distinct");
    let decoded: QuadraticSolution = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, solution);

    let degenerate = QuadraticSolver::default().solve(&QuadraticEquation::new(0.0, 1.0, 1.0));
    let json = serde_json::to_value(&degenerate).expect("serialize");
    assert_eq!(json["status"], "degenerate");
    assert_eq!(json["message"], DEGENERATE_MESSAGE);
}
