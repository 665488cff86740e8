//! One module per `eqs` subcommand.

pub mod discriminant;
pub mod interactive;
pub mod linear;
pub mod quadratic;

use std::error::Error;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::report::{to_json, write_json};

/// Shared tail of the one-shot commands: optional JSON to stdout, optional
/// report file, otherwise the rendered console lines.
pub(crate) fn emit<T: Serialize>(
    report: &T,
    lines: &[String],
    json: bool,
    out: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", to_json(report)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    if let Some(path) = out {
        write_json(path, report)?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}
