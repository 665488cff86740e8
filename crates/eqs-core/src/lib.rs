#![deny(missing_docs)]
//! Shared primitives for the eqs linear and quadratic solvers: the
//! tolerance comparator, canonical term formatting, errors and configuration.

pub mod config;
pub mod errors;
pub mod format;
pub mod provenance;
pub mod tolerance;

pub use config::{FallbackPolicy, SolverConfig, MAX_PRECISION};
pub use errors::{EqsError, ErrorInfo};
pub use format::{leading_term, signed_term, EQUATION_SUFFIX};
pub use provenance::SchemaVersion;
pub use tolerance::{is_near_zero, Tolerance, DEFAULT_EPSILON};
