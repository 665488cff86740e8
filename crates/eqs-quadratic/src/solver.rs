use eqs_core::Tolerance;

use crate::equation::QuadraticEquation;
use crate::solution::{QuadraticRoots, QuadraticSolution, RootNature, DEGENERATE_MESSAGE};

/// Computes `b² - 4ac` without applying any tolerance.
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Classifies, solves and verifies quadratics under a fixed tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadraticSolver {
    tolerance: Tolerance,
}

impl QuadraticSolver {
    /// Creates a solver using the supplied tolerance for every decision.
    pub const fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Returns the tolerance used by this solver.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Discriminant of `eq`.
    pub fn discriminant(&self, eq: &QuadraticEquation) -> f64 {
        discriminant(eq.a, eq.b, eq.c)
    }

    /// Maps a discriminant to the nature of the roots.
    ///
    /// The near-zero test runs before the sign test, so a discriminant of
    /// `-1e-12` is `RealEqual`, never `Complex`.
    pub fn classify_root_nature(&self, discriminant: f64) -> RootNature {
        if self.tolerance.is_near_zero(discriminant) {
            RootNature::RealEqual
        } else if discriminant > 0.0 {
            RootNature::RealDistinct
        } else {
            RootNature::Complex
        }
    }

    /// Applies the quadratic formula.
    ///
    /// A near-zero leading coefficient yields [`QuadraticSolution::Degenerate`].
    /// Distinct roots are ordered plus-branch first.
    pub fn solve(&self, eq: &QuadraticEquation) -> QuadraticSolution {
        if self.tolerance.is_near_zero(eq.a) {
            return QuadraticSolution::Degenerate {
                message: DEGENERATE_MESSAGE.to_string(),
            };
        }

        let discriminant = self.discriminant(eq);
        let nature = self.classify_root_nature(discriminant);
        let two_a = 2.0 * eq.a;

        let (root1, root2, imaginary_part) = match nature {
            RootNature::RealDistinct => {
                let sqrt_d = discriminant.sqrt();
                ((-eq.b + sqrt_d) / two_a, (-eq.b - sqrt_d) / two_a, 0.0)
            }
            RootNature::RealEqual => {
                let root = -eq.b / two_a;
                (root, root, 0.0)
            }
            RootNature::Complex => {
                let real = -eq.b / two_a;
                // magnitude only; the sign of `a` does not change the pair
                let imaginary = ((-discriminant).sqrt() / two_a).abs();
                (real, real, imaginary)
            }
        };

        QuadraticSolution::Solved(QuadraticRoots {
            root1,
            root2,
            imaginary_part,
            discriminant,
            nature,
        })
    }

    /// Substitutes a real `x` and checks the residual.
    ///
    /// Complex roots cannot be checked this way; see
    /// [`QuadraticSolver::verify_roots`].
    pub fn verify(&self, eq: &QuadraticEquation, x: f64) -> bool {
        self.tolerance.is_near_zero(eq.evaluate(x))
    }

    /// Verifies both real roots, or returns `None` for a conjugate pair.
    pub fn verify_roots(
        &self,
        eq: &QuadraticEquation,
        roots: &QuadraticRoots,
    ) -> Option<(bool, bool)> {
        let (root1, root2) = roots.real_roots()?;
        Some((self.verify(eq, root1), self.verify(eq, root2)))
    }

    /// Renders the equation in canonical form under this solver's tolerance.
    pub fn format(&self, eq: &QuadraticEquation) -> String {
        eq.format_with(&self.tolerance)
    }
}
