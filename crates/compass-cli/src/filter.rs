//! # Filter Subcommand
//!
//! Prints the order-preserving subsequence of records matching the given
//! status/category/query constraints.

use anyhow::{Context, Result};
use clap::Args;

use compass_metrics::{filter_records, FilterCriteria};
use compass_store::RecordStore;

/// Arguments for the `compass filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Retain records with this status (repeatable, case-insensitive).
    /// Omitting the flag imposes no status constraint.
    #[arg(long = "status", value_name = "STATUS")]
    pub statuses: Vec<String>,

    /// Retain records in this category (repeatable, case-insensitive).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Case-insensitive substring matched against id, section, requirement
    /// text, and notes.
    #[arg(long, default_value = "")]
    pub query: String,
}

/// Execute the filter subcommand.
pub fn run_filter(args: &FilterArgs, store: &RecordStore, json: bool) -> Result<u8> {
    let records = store
        .load()
        .context("failed to load requirement snapshot")?;

    let criteria = FilterCriteria::new(&args.statuses, &args.categories, &args.query);
    let matched = filter_records(records, &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
        return Ok(0);
    }

    println!("{} of {} requirements match", matched.len(), records.len());
    for rec in &matched {
        println!(
            "{}  [{}] {} ({}%)  {}",
            rec.id, rec.category, rec.status, rec.compliance_score, rec.section
        );
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn fixture() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "ID,Section,Main Category,Status,Compliance Score,Requirement,Test Steps,Notes"
        )
        .unwrap();
        writeln!(file, "CIP-1,Identity,CIP,Met,100,Verify identity,,").unwrap();
        writeln!(file, "CDD-1,Due Diligence,CDD,Does Not Meet,0,Risk-rate customers,,").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn filter_exits_clean_with_and_without_constraints() {
        let file = fixture();
        let store = RecordStore::new(file.path());

        let unconstrained = FilterArgs {
            statuses: vec![],
            categories: vec![],
            query: String::new(),
        };
        assert_eq!(run_filter(&unconstrained, &store, false).unwrap(), 0);

        let constrained = FilterArgs {
            statuses: vec!["Met".to_string()],
            categories: vec!["CIP".to_string()],
            query: "verify".to_string(),
        };
        assert_eq!(run_filter(&constrained, &store, true).unwrap(), 0);
    }
}
