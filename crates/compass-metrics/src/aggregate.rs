//! # Aggregation — Posture Metrics
//!
//! Summary metrics over any record collection. All functions are pure and
//! order-independent except for one deliberate ordering rule: grouped maps
//! report keys in first-occurrence order of the input (with the three
//! canonical statuses always seeded first, in canonical order).
//!
//! ## Degenerate-Case Policy
//!
//! An empty collection is not an error: the overall score degrades to
//! `0.0`, category scores to an empty map, and status counts to the three
//! canonical keys at zero.

use indexmap::IndexMap;

use compass_core::{ComplianceStatus, RequirementRecord};

use crate::round_to_tenth;

/// Arithmetic mean of `compliance_score` across `records`, rounded to one
/// decimal place. `0.0` for an empty collection.
pub fn overall_score(records: &[RequirementRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|rec| rec.compliance_score).sum();
    round_to_tenth(total / records.len() as f64)
}

/// Mean `compliance_score` per category, rounded to one decimal place.
///
/// Keys appear in first-occurrence order of each category in the input,
/// so the result is deterministic for a deterministic input order.
pub fn category_scores(records: &[RequirementRecord]) -> IndexMap<String, f64> {
    let mut grouped: IndexMap<String, Vec<f64>> = IndexMap::new();
    for record in records {
        grouped
            .entry(record.category.clone())
            .or_default()
            .push(record.compliance_score);
    }
    grouped
        .into_iter()
        .map(|(category, scores)| {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (category, round_to_tenth(mean))
        })
        .collect()
}

/// Occurrences of each status label.
///
/// The three canonical statuses are always present (seeded to zero, in
/// canonical order). A non-canonical status is still counted, under its
/// literal label, appended in first-occurrence order — the map is not
/// restricted to the canonical keys.
pub fn status_counts(records: &[RequirementRecord]) -> IndexMap<String, u64> {
    let mut counts: IndexMap<String, u64> = ComplianceStatus::canonical()
        .iter()
        .map(|status| (status.label().to_string(), 0))
        .collect();
    for record in records {
        *counts.entry(record.status.label().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Records grouped by status label, preserving input order within each
/// group. Canonical keys are always present, possibly empty.
pub fn records_by_status(
    records: &[RequirementRecord],
) -> IndexMap<String, Vec<RequirementRecord>> {
    let mut grouped: IndexMap<String, Vec<RequirementRecord>> = ComplianceStatus::canonical()
        .iter()
        .map(|status| (status.label().to_string(), Vec::new()))
        .collect();
    for record in records {
        grouped
            .entry(record.status.label().to_string())
            .or_default()
            .push(record.clone());
    }
    grouped
}
