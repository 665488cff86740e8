//! `eqs quadratic`.

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use eqs_core::FallbackPolicy;
use eqs_quadratic::QuadraticEquation;
use tracing::{info, warn};

use crate::input::parse_coefficient;
use crate::render::quadratic_lines;
use crate::report::QuadraticReport;
use crate::settings::Settings;

/// Coefficients and output options for one quadratic solve.
#[derive(Args, Debug)]
pub struct QuadraticArgs {
    /// Coefficient of x².
    #[arg(long, value_parser = parse_coefficient, allow_hyphen_values = true)]
    pub a: f64,
    /// Coefficient of x.
    #[arg(long, value_parser = parse_coefficient, allow_hyphen_values = true)]
    pub b: f64,
    /// Constant term.
    #[arg(long, value_parser = parse_coefficient, allow_hyphen_values = true)]
    pub c: f64,
    /// Overrides the configured handling of a vanishing leading coefficient.
    #[arg(long, value_enum)]
    pub fallback: Option<FallbackArg>,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// Also write the JSON report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Command line spelling of [`FallbackPolicy`].
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FallbackArg {
    /// Report the degenerate outcome (nobody to ask here).
    Ask,
    /// Solve b·x + c = 0 instead.
    Always,
    /// Report the degenerate outcome.
    Never,
}

impl From<FallbackArg> for FallbackPolicy {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Ask => FallbackPolicy::Ask,
            FallbackArg::Always => FallbackPolicy::Always,
            FallbackArg::Never => FallbackPolicy::Never,
        }
    }
}

/// Solves, prints and optionally saves the quadratic report.
pub fn run(args: &QuadraticArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let equation = QuadraticEquation::new(args.a, args.b, args.c);
    let mut report = QuadraticReport::build(&settings.quadratic, equation);
    let policy = args.fallback.map(FallbackPolicy::from).unwrap_or(settings.fallback);

    if !report.solution.is_valid() {
        // no one to ask outside the menu
        if policy == FallbackPolicy::Always {
            report = report.with_linear_fallback(&settings.linear);
        } else {
            warn!(equation = %report.formatted, "degenerate quadratic, linear fallback disabled");
        }
    }
    info!(equation = %report.formatted, valid = report.solution.is_valid(), "solved quadratic equation");
    let lines = quadratic_lines(&report, settings.precision);
    super::emit(&report, &lines, args.json, args.out.as_deref())
}
