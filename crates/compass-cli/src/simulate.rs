//! # Simulate Subcommand
//!
//! What-if projection: reports the current score, the projected score with
//! the selected requirements fully remediated, the delta, and the status
//! counts of the simulated view. Nothing is persisted — the hypothesis
//! lives only in this invocation's output.

use anyhow::{Context, Result};
use clap::Args;

use compass_metrics::{overall_score, projected_delta, projected_score, simulated_view, status_counts};
use compass_store::RecordStore;

/// Arguments for the `compass simulate` subcommand.
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Requirement ids to treat as fully remediated (case-insensitive).
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

/// Execute the simulate subcommand.
pub fn run_simulate(args: &SimulateArgs, store: &RecordStore, json: bool) -> Result<u8> {
    let records = store
        .load()
        .context("failed to load requirement snapshot")?;

    let current = overall_score(records);
    let projected = projected_score(records, &args.ids);
    let delta = projected_delta(records, &args.ids);
    let simulated_counts = status_counts(&simulated_view(records, &args.ids));

    if json {
        let payload = serde_json::json!({
            "selected_ids": &args.ids,
            "current_score": current,
            "projected_score": projected,
            "delta": delta,
            "simulated_status_counts": simulated_counts,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(0);
    }

    println!("Current score:   {current}%");
    println!("Projected score: {projected}%");
    println!("Delta:           {delta:+}%");
    println!();
    println!("Simulated status counts:");
    for (label, count) in &simulated_counts {
        println!("  {label}: {count}");
    }

    Ok(0)
}
