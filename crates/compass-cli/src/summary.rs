//! # Summary Subcommand
//!
//! Aggregate posture over the full snapshot: overall score, status counts,
//! and per-category scores.

use anyhow::{Context, Result};

use compass_metrics::{category_scores, overall_score, status_counts};
use compass_store::RecordStore;

/// Execute the summary subcommand.
pub fn run_summary(store: &RecordStore, json: bool) -> Result<u8> {
    let records = store
        .load()
        .context("failed to load requirement snapshot")?;

    let overall = overall_score(records);
    let counts = status_counts(records);
    let categories = category_scores(records);

    if json {
        let payload = serde_json::json!({
            "total_requirements": records.len(),
            "overall_score": overall,
            "status_counts": counts,
            "category_scores": categories,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(0);
    }

    println!("Total requirements: {}", records.len());
    println!("Overall compliance: {overall}%");
    println!();
    println!("Status counts:");
    for (label, count) in &counts {
        println!("  {label}: {count}");
    }
    println!();
    println!("Category scores:");
    for (category, score) in &categories {
        println!("  {category}: {score}%");
    }

    Ok(0)
}
