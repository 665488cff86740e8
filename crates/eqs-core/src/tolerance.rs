//! Near-zero comparisons used by every solver decision.
//!
//! All "is this coefficient zero" and "is the discriminant zero" questions go
//! through a [`Tolerance`]. Floating-point values are never compared with
//! exact equality.

use serde::{Deserialize, Serialize};

use crate::errors::{EqsError, ErrorInfo};

/// Epsilon used when no other tolerance is configured.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Absolute tolerance below which a value is treated as zero.
///
/// Deserialization goes through [`Tolerance::new`], so a decoded tolerance
/// always holds a positive finite epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTolerance", into = "RawTolerance")]
pub struct Tolerance {
    epsilon: f64,
}

#[derive(Serialize, Deserialize)]
struct RawTolerance {
    epsilon: f64,
}

impl TryFrom<RawTolerance> for Tolerance {
    type Error = EqsError;

    fn try_from(raw: RawTolerance) -> Result<Self, Self::Error> {
        Tolerance::new(raw.epsilon)
    }
}

impl From<Tolerance> for RawTolerance {
    fn from(tol: Tolerance) -> Self {
        Self {
            epsilon: tol.epsilon,
        }
    }
}

impl Tolerance {
    /// Creates a tolerance, rejecting non-finite or non-positive epsilons.
    pub fn new(epsilon: f64) -> Result<Self, EqsError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(EqsError::Config(
                ErrorInfo::new("tolerance-invalid", "tolerance must be a positive finite number")
                    .with_value("epsilon", epsilon)
                    .with_hint(format!("the default tolerance is {DEFAULT_EPSILON:e}")),
            ));
        }
        Ok(Self { epsilon })
    }

    /// Returns the configured epsilon.
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns `true` when `|value| < epsilon`.
    pub fn is_near_zero(&self, value: f64) -> bool {
        value.abs() < self.epsilon
    }

    /// Returns `true` when `value` lies within epsilon of `target`.
    pub fn is_near(&self, value: f64, target: f64) -> bool {
        self.is_near_zero(value - target)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Near-zero test with [`DEFAULT_EPSILON`].
pub fn is_near_zero(value: f64) -> bool {
    Tolerance::default().is_near_zero(value)
}
