use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use eqs_cli::commands::{
    discriminant::{self, DiscriminantArgs},
    interactive::{self, InteractiveArgs},
    linear::{self, LinearArgs},
    quadratic::{self, QuadraticArgs},
};
use eqs_cli::Settings;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "eqs", version, about = "Linear and quadratic equation solver")]
struct Cli {
    /// YAML file with tolerance, precision and fallback settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Near-zero tolerance (overrides the configuration file).
    #[arg(long, global = true)]
    tolerance: Option<f64>,
    /// Decimal places for printed values (overrides the configuration file).
    #[arg(long, global = true)]
    precision: Option<usize>,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a·x + b = 0.
    Linear(LinearArgs),
    /// Solve a·x² + b·x + c = 0.
    Quadratic(QuadraticArgs),
    /// Explain how the discriminant decides the roots.
    DiscriminantInfo(DiscriminantArgs),
    /// Run the menu-driven session.
    Interactive(InteractiveArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let settings = Settings::resolve(cli.config.as_deref(), cli.tolerance, cli.precision)?;
    debug!(command = ?cli.command, "dispatching");
    match cli.command {
        Command::Linear(args) => linear::run(&args, &settings),
        Command::Quadratic(args) => quadratic::run(&args, &settings),
        Command::DiscriminantInfo(args) => discriminant::run(&args),
        Command::Interactive(args) => interactive::run(&args, settings),
    }
}
