//! # Simulation — What-If Remediation Projections
//!
//! Computes the hypothetical posture assuming a chosen set of requirements
//! is fully remediated. Selection is by identifier, matched
//! case-insensitively. Nothing here persists: the simulated view is a
//! throwaway input for downstream recomputation and must never be confused
//! with the real dataset.
//!
//! ## Identity Laws
//!
//! - `projected_score(records, [])` equals `overall_score(records)`.
//! - `projected_score(records, all_ids)` equals `100.0` for non-empty input.

use std::collections::HashSet;

use compass_core::{RequirementRecord, FULL_COMPLIANCE_SCORE};

use crate::aggregate::overall_score;
use crate::round_to_tenth;

fn selection(selected_ids: &[String]) -> HashSet<String> {
    selected_ids.iter().map(|id| id.to_lowercase()).collect()
}

fn is_selected(record: &RequirementRecord, selected: &HashSet<String>) -> bool {
    selected.contains(&record.id.as_str().to_lowercase())
}

/// Mean score with every selected record treated as fully remediated
/// (score 100) and every other record contributing its stored score.
/// Rounded to one decimal place; `0.0` for an empty collection.
pub fn projected_score(records: &[RequirementRecord], selected_ids: &[String]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let selected = selection(selected_ids);
    let total: f64 = records
        .iter()
        .map(|rec| {
            if is_selected(rec, &selected) {
                FULL_COMPLIANCE_SCORE
            } else {
                rec.compliance_score
            }
        })
        .sum();
    let projected = round_to_tenth(total / records.len() as f64);
    tracing::debug!(
        selected = selected.len(),
        records = records.len(),
        projected,
        "projected remediation score"
    );
    projected
}

/// How much the overall score would improve: `projected − current`,
/// rounded to one decimal place.
pub fn projected_delta(records: &[RequirementRecord], selected_ids: &[String]) -> f64 {
    round_to_tenth(projected_score(records, selected_ids) - overall_score(records))
}

/// A derived view with every selected record replaced by its remediated
/// copy (status `Met`, score 100) and every other record passed through
/// unchanged, preserving order.
///
/// Feed this to status-count or visual recomputation under the hypothesis;
/// it is never the real dataset.
pub fn simulated_view(
    records: &[RequirementRecord],
    selected_ids: &[String],
) -> Vec<RequirementRecord> {
    let selected = selection(selected_ids);
    records
        .iter()
        .map(|rec| {
            if is_selected(rec, &selected) {
                rec.with_remediated()
            } else {
                rec.clone()
            }
        })
        .collect()
}
