//! `eqs discriminant-info`.

use std::error::Error;

use clap::Args;
use eqs_quadratic::DISCRIMINANT_GUIDE;

/// The command takes no arguments.
#[derive(Args, Debug)]
pub struct DiscriminantArgs {}

/// Prints the discriminant guide.
pub fn run(_args: &DiscriminantArgs) -> Result<(), Box<dyn Error>> {
    println!("{DISCRIMINANT_GUIDE}");
    Ok(())
}
