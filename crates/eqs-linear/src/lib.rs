#![deny(missing_docs)]
//! Linear equation solver for `a·x + b = 0`.
//!
//! Every decision about a vanishing coefficient goes through the
//! [`eqs_core::Tolerance`] held by the [`LinearSolver`]. Equations are plain
//! values; nothing derived from them is cached.

mod equation;
mod solver;

pub use equation::LinearEquation;
pub use solver::{LinearKind, LinearOutcome, LinearSolver};
