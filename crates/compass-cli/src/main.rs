//! # compass CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map onto a tracing `EnvFilter`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use compass_cli::filter::{run_filter, FilterArgs};
use compass_cli::show::{run_show, ShowArgs};
use compass_cli::simulate::{run_simulate, SimulateArgs};
use compass_cli::summary::run_summary;
use compass_cli::DEFAULT_DATA_PATH;
use compass_store::RecordStore;

/// COMPASS — Compliance Posture Assessment Stack.
///
/// Answers three questions about a static snapshot of compliance-requirement
/// records: what is the current posture, which records match a filter, and
/// what would the posture become if selected gaps were remediated.
#[derive(Parser, Debug)]
#[command(name = "compass", version, about, long_about = None)]
struct Cli {
    /// Path to the CSV snapshot.
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate posture: overall score, status counts, category scores.
    Summary,

    /// Records matching status, category, and free-text constraints.
    Filter(FilterArgs),

    /// A single record by exact identifier.
    Show(ShowArgs),

    /// Projected posture with the given requirement ids remediated.
    Simulate(SimulateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!(data = %cli.data.display(), "compass CLI starting");

    let store = RecordStore::new(&cli.data);

    let result = match cli.command {
        Commands::Summary => run_summary(&store, cli.json),
        Commands::Filter(args) => run_filter(&args, &store, cli.json),
        Commands::Show(args) => run_show(&args, &store, cli.json),
        Commands::Simulate(args) => run_simulate(&args, &store, cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
