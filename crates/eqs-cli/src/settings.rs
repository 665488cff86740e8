//! Solver settings resolved from the configuration file and flags.

use std::path::Path;

use eqs_core::{EqsError, FallbackPolicy, SolverConfig};
use eqs_linear::LinearSolver;
use eqs_quadratic::QuadraticSolver;
use tracing::debug;

/// Solvers and presentation options resolved from configuration and flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Linear solver carrying the resolved tolerance.
    pub linear: LinearSolver,
    /// Quadratic solver carrying the same tolerance.
    pub quadratic: QuadraticSolver,
    /// Decimal places for printed values.
    pub precision: usize,
    /// Handling of quadratics with `a ≈ 0`.
    pub fallback: FallbackPolicy,
}

impl Settings {
    /// Builds settings from an already validated configuration.
    pub fn from_config(config: &SolverConfig) -> Result<Self, EqsError> {
        config.validate()?;
        let tolerance = config.tolerance()?;
        Ok(Self {
            linear: LinearSolver::new(tolerance),
            quadratic: QuadraticSolver::new(tolerance),
            precision: config.precision,
            fallback: config.linear_fallback,
        })
    }

    /// Loads the optional YAML file, then applies command line overrides.
    pub fn resolve(
        config_path: Option<&Path>,
        tolerance: Option<f64>,
        precision: Option<usize>,
    ) -> Result<Self, EqsError> {
        let mut config = match config_path {
            Some(path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };
        if let Some(tolerance) = tolerance {
            config.tolerance = tolerance;
        }
        if let Some(precision) = precision {
            config.precision = precision;
        }
        let settings = Self::from_config(&config)?;
        debug!(
            tolerance = config.tolerance,
            precision = config.precision,
            fallback = ?config.linear_fallback,
            "resolved solver settings"
        );
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            linear: LinearSolver::default(),
            quadratic: QuadraticSolver::default(),
            precision: SolverConfig::default().precision,
            fallback: FallbackPolicy::default(),
        }
    }
}
