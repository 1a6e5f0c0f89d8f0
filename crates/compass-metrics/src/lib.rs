//! # compass-metrics — Posture Computation
//!
//! Pure functions over requirement snapshots. Every operation here takes
//! `&[RequirementRecord]` and allocates a fresh output — no locking, no IO,
//! no hidden state — so the functions are safe to call from any thread at
//! any time.
//!
//! ## Modules
//!
//! - [`filter`]: order-preserving subsequence selection by status,
//!   category, and free-text query.
//! - [`aggregate`]: overall score, per-category scores, status counts, and
//!   status grouping.
//! - [`simulate`]: what-if projections assuming selected requirements are
//!   fully remediated.
//!
//! ## Degenerate Inputs
//!
//! Aggregation never fails: empty collections degrade to zero scores and
//! empty/zeroed maps by policy.

pub mod aggregate;
pub mod filter;
pub mod simulate;

pub use aggregate::{category_scores, overall_score, records_by_status, status_counts};
pub use filter::{filter_records, FilterCriteria};
pub use simulate::{projected_delta, projected_score, simulated_view};

/// Round to one decimal place, the reporting precision for all scores.
/// Ties round to even (62.25 reports as 62.2, 61.75 as 61.8), matching the
/// reporting convention of the source pipeline.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    let floor = scaled.floor();
    let diff = scaled - floor;
    let rounded = if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded / 10.0
}
