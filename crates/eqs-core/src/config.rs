//! Solver configuration loaded from YAML.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{EqsError, ErrorInfo};
use crate::tolerance::{Tolerance, DEFAULT_EPSILON};

/// Largest decimal precision accepted for fixed-point rendering.
pub const MAX_PRECISION: usize = 15;

/// YAML-configurable settings for the solvers and their front ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Absolute epsilon used by every near-zero decision.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Decimal places used when printing roots and discriminants.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// What to do when a quadratic has a vanishing leading coefficient.
    #[serde(default)]
    pub linear_fallback: FallbackPolicy,
}

fn default_tolerance() -> f64 {
    DEFAULT_EPSILON
}

fn default_precision() -> usize {
    6
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            precision: default_precision(),
            linear_fallback: FallbackPolicy::default(),
        }
    }
}

/// Handling of degenerate quadratics (`a ≈ 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Prompt when interactive, otherwise report the degenerate outcome.
    #[default]
    Ask,
    /// Always solve `b·x + c = 0` with the linear solver.
    Always,
    /// Never fall back; report the degenerate outcome.
    Never,
}

impl SolverConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EqsError> {
        let config: SolverConfig = serde_yaml::from_str(yaml).map_err(|err| {
            EqsError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, EqsError> {
        let yaml = fs::read_to_string(path).map_err(|err| EqsError::io("config-read", path, err))?;
        Self::from_yaml_str(&yaml).map_err(|err| match err {
            EqsError::Config(info) => {
                EqsError::Config(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Checks the tolerance and precision bounds.
    pub fn validate(&self) -> Result<(), EqsError> {
        self.tolerance()?;
        if self.precision > MAX_PRECISION {
            return Err(EqsError::Config(
                ErrorInfo::new("precision-range", "precision exceeds the supported maximum")
                    .with_context("precision", self.precision.to_string())
                    .with_context("max", MAX_PRECISION.to_string()),
            ));
        }
        Ok(())
    }

    /// Returns the validated tolerance.
    pub fn tolerance(&self) -> Result<Tolerance, EqsError> {
        Tolerance::new(self.tolerance)
    }
}
