//! `eqs linear`.

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use eqs_linear::LinearEquation;
use tracing::info;

use crate::input::parse_coefficient;
use crate::render::linear_lines;
use crate::report::LinearReport;
use crate::settings::Settings;

/// Coefficients and output options for one linear solve.
#[derive(Args, Debug)]
pub struct LinearArgs {
    /// Coefficient of x.
    #[arg(long, value_parser = parse_coefficient, allow_hyphen_values = true)]
    pub a: f64,
    /// Constant term.
    #[arg(long, value_parser = parse_coefficient, allow_hyphen_values = true)]
    pub b: f64,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,
    /// Also write the JSON report to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Solves, prints and optionally saves the linear report.
pub fn run(args: &LinearArgs, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let report = LinearReport::build(&settings.linear, LinearEquation::new(args.a, args.b));
    info!(equation = %report.formatted, kind = ?report.kind, "solved linear equation");
    let lines = linear_lines(&report, settings.precision);
    super::emit(&report, &lines, args.json, args.out.as_deref())
}
