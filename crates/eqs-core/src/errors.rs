//! Structured error types shared across the eqs crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`EqsError`] variant.
///
/// Renders as `[code] message (key=value, ...); hint: ...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `tolerance-invalid` or `input-not-finite`.
    pub code: String,
    /// Sentence shown to the user as-is.
    pub message: String,
    /// Offending input, numeric limits or file paths, keyed by name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the user can change to get past the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Records a numeric value (coefficient, epsilon, bound) in the context.
    pub fn with_value(self, key: impl Into<String>, value: f64) -> Self {
        self.with_context(key, value.to_string())
    }

    /// Sets the remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for everything around the solving engine.
///
/// The solvers themselves never fail: degenerate coefficients are typed
/// outcomes. These errors come from parsing, configuration and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum EqsError {
    /// Rejected user input (coefficients, menu choices).
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Invalid tolerance, precision or configuration document.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// File system access failures.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Report encoding failures.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self
                .context
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            write!(f, " ({})", pairs.join(", "))?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; hint: {hint}")?;
        }
        Ok(())
    }
}

impl EqsError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            EqsError::Input(info)
            | EqsError::Config(info)
            | EqsError::Io(info)
            | EqsError::Serde(info) => info,
        }
    }

    /// Wraps an I/O failure on `path` into an [`EqsError::Io`].
    pub fn io(code: &str, path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        EqsError::Io(
            ErrorInfo::new(code, err.to_string())
                .with_context("path", path.as_ref().display().to_string()),
        )
    }
}
