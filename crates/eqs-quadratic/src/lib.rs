#![deny(missing_docs)]
//! Quadratic equation solver for `a·x² + b·x + c = 0`.
//!
//! [`QuadraticSolver::solve`] never fails: a vanishing leading coefficient is
//! reported as [`QuadraticSolution::Degenerate`], and every genuine quadratic
//! yields [`QuadraticRoots`] tagged with a [`RootNature`].

mod equation;
mod guide;
mod solution;
mod solver;

pub use equation::QuadraticEquation;
pub use guide::DISCRIMINANT_GUIDE;
pub use solution::{QuadraticRoots, QuadraticSolution, RootNature, DEGENERATE_MESSAGE};
pub use solver::{discriminant, QuadraticSolver};
