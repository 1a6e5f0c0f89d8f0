//! Store-specific error types.
//!
//! Structured errors for snapshot loading. All errors carry the source
//! path; row-level corruption carries the 1-based data-row number.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while loading the requirement snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The external source does not exist. Fatal: no computation can
    /// proceed without the snapshot.
    #[error("data source not found: {path}")]
    DataUnavailable {
        /// Path that was expected to hold the snapshot.
        path: PathBuf,
    },

    /// A row failed to parse into the expected shape. Fatal for the whole
    /// load — the snapshot is all-or-nothing.
    #[error("corrupt data in {path} at row {row}: {detail}")]
    DataCorrupt {
        /// Source path.
        path: PathBuf,
        /// 1-based data-row number (0 when the failure is structural,
        /// e.g. an unreadable header).
        row: u64,
        /// Parse failure detail.
        detail: String,
    },

    /// I/O failure other than a missing file.
    #[error("io error reading {path}: {source}")]
    Io {
        /// Source path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}
