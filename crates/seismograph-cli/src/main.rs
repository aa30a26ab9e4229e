//! Seismograph CLI.
//!
//! Thin front end over `seismograph-core`: reads a JSON window of raw
//! aspect records, runs the engine, and emits the JSON report. No
//! algorithmic logic lives here.
//!
//! # Commands
//!
//! - `run`: evaluate a window file and print/write the report
//! - `defaults`: print a calibration JSON for use with `run --config`

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::CliError;

/// Seismograph - bounded daily indices from aspect geometry
#[derive(Parser)]
#[command(name = "seismograph")]
#[command(version)]
#[command(about = "Compute bounded daily indices from aspect geometry")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a window of raw aspects
    Run(commands::run::RunArgs),
    /// Print a calibration as JSON
    Defaults(commands::defaults::DefaultsArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Run(args) => commands::run::execute(args),
        Commands::Defaults(args) => commands::defaults::execute(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}
