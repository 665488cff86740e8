use serde::{Deserialize, Serialize};

/// Message reported for a quadratic whose leading coefficient vanishes.
pub const DEGENERATE_MESSAGE: &str =
    "This is not a quadratic equation (a = 0). Use linear equation solver instead.";

/// Nature of the roots as decided by the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootNature {
    /// Discriminant within tolerance of zero: one repeated real root.
    RealEqual,
    /// Positive discriminant: two different real roots.
    RealDistinct,
    /// Negative discriminant: a complex-conjugate pair.
    Complex,
}

impl RootNature {
    /// Human readable label used by console output and saved reports.
    pub fn description(&self) -> &'static str {
        match self {
            RootNature::RealEqual => "Real and equal (one repeated root)",
            RootNature::RealDistinct => "Real and distinct (two different roots)",
            RootNature::Complex => "Complex (no real roots)",
        }
    }

    /// Returns `true` for the natures whose roots are real numbers.
    pub fn is_real(&self) -> bool {
        !matches!(self, RootNature::Complex)
    }
}

/// Roots of a genuine quadratic.
///
/// For [`RootNature::Complex`] both `root1` and `root2` hold the shared real
/// part and the pair is `root1 ± imaginary_part·i`. For real natures
/// `imaginary_part` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticRoots {
    /// Plus-branch root (or the real part of the conjugate pair).
    pub root1: f64,
    /// Minus-branch root (or the real part of the conjugate pair).
    pub root2: f64,
    /// Magnitude of the imaginary part, non-zero only for complex roots.
    pub imaginary_part: f64,
    /// Raw `b² - 4ac`, no tolerance applied.
    pub discriminant: f64,
    /// Classification of the discriminant.
    pub nature: RootNature,
}

impl QuadraticRoots {
    /// `(root1, root2)` when both roots are real.
    pub fn real_roots(&self) -> Option<(f64, f64)> {
        self.nature.is_real().then_some((self.root1, self.root2))
    }

    /// `(real, imaginary)` of the pair `real ± imaginary·i` for complex roots.
    pub fn conjugate_pair(&self) -> Option<(f64, f64)> {
        (self.nature == RootNature::Complex).then_some((self.root1, self.imaginary_part))
    }
}

/// Outcome of solving a quadratic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuadraticSolution {
    /// Leading coefficient is near zero; there are no quadratic roots.
    Degenerate {
        /// Explanation suitable for display.
        message: String,
    },
    /// A genuine quadratic with its roots.
    Solved(QuadraticRoots),
}

impl QuadraticSolution {
    /// `false` only for the degenerate outcome.
    pub fn is_valid(&self) -> bool {
        matches!(self, QuadraticSolution::Solved(_))
    }

    /// Degenerate explanation, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            QuadraticSolution::Degenerate { message } => Some(message),
            QuadraticSolution::Solved(_) => None,
        }
    }

    /// Roots of a genuine quadratic.
    pub fn roots(&self) -> Option<&QuadraticRoots> {
        match self {
            QuadraticSolution::Solved(roots) => Some(roots),
            QuadraticSolution::Degenerate { .. } => None,
        }
    }
}
