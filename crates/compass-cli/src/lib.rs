//! # compass-cli — CLI Consumer for the COMPASS Stack
//!
//! Provides the `compass` command-line interface. The CLI is a presentation
//! collaborator: it loads the snapshot through [`compass_store::RecordStore`],
//! calls the pure functions in `compass-metrics`, and formats their outputs.
//! It implements no aggregation of its own.
//!
//! ## Subcommands
//!
//! - `compass summary` — overall score, status counts, category scores.
//! - `compass filter` — records matching status/category/query constraints.
//! - `compass show <ID>` — a single record by exact identifier.
//! - `compass simulate <ID>…` — projected posture with the given gaps
//!   remediated.

pub mod filter;
pub mod show;
pub mod simulate;
pub mod summary;

/// Default snapshot location, matching the spreadsheet converter's output.
pub const DEFAULT_DATA_PATH: &str = "data/compliance_dashboard_data.csv";
