//! # Show Subcommand
//!
//! Single-record lookup by exact identifier. A missing record is reported
//! with exit code 1, not treated as an operational error.

use anyhow::{Context, Result};
use clap::Args;

use compass_core::RequirementRecord;
use compass_store::RecordStore;

/// Arguments for the `compass show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Requirement identifier (exact match).
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, store: &RecordStore, json: bool) -> Result<u8> {
    let record = store
        .get(&args.id)
        .context("failed to load requirement snapshot")?;

    let Some(record) = record else {
        eprintln!("requirement {} not found", args.id);
        return Ok(1);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(0);
    }

    print_record(record);
    Ok(0)
}

/// Text rendering of a single record.
fn print_record(record: &RequirementRecord) {
    println!("ID:            {}", record.id);
    println!("Section:       {}", record.section);
    println!("Category:      {}", record.category);
    println!("Status:        {}", record.status);
    println!("Score:         {}%", record.compliance_score);
    println!("Risk severity: {}", record.risk_severity());
    println!("Requirement:   {}", record.requirement);
    println!("Test steps:    {}", record.test_steps);
    println!("Notes:         {}", record.notes);
}
