//! `run`: evaluate a window of raw aspects and emit the JSON report.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use tracing::info;

use seismograph_core::aspect::RawAspect;
use seismograph_core::config::SeismographConfig;
use seismograph_core::hooks::HookMode;
use seismograph_core::processor::{Seismograph, WindowReport};

use crate::error::CliError;

/// Arguments for the `run` subcommand.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input JSON file: a map from ISO date to a list of raw aspects.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Optional configuration JSON; defaults to the standard calibration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Use the strict orb preset (ignored when --config is given).
    #[arg(long)]
    pub strict: bool,

    /// Paired-chart hook bounds instead of solo.
    #[arg(long)]
    pub paired: bool,

    /// Write the report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON report.
    #[arg(long)]
    pub pretty: bool,
}

/// Load, evaluate and serialize. Split from [`execute`] so tests can call
/// it without a process boundary.
pub fn evaluate(args: &RunArgs) -> Result<WindowReport, CliError> {
    let config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None if args.strict => SeismographConfig::strict(),
        None => SeismographConfig::standard(),
    };

    let raw = fs::read_to_string(&args.input)?;
    let window: BTreeMap<NaiveDate, Vec<RawAspect>> = serde_json::from_str(&raw)?;
    info!(days = window.len(), "loaded window");

    let mode = if args.paired {
        HookMode::Paired
    } else {
        HookMode::Solo
    };
    let engine = Seismograph::new(config)?.with_mode(mode);
    Ok(engine.evaluate_window(&window)?)
}

/// Run the subcommand end to end.
pub fn execute(args: &RunArgs) -> Result<(), CliError> {
    let report = evaluate(args)?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
