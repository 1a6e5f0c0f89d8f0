//! # Record Store — Guarded One-Time Load
//!
//! Reads the CSV snapshot produced by the (out-of-scope) spreadsheet
//! converter into [`RequirementRecord`] values, in source order, dropping
//! rows with a blank `ID` before construction.
//!
//! ## Source Contract
//!
//! One logical row per requirement with columns `ID`, `Section`,
//! `Main Category`, `Status`, `Compliance Score`, `Requirement`,
//! `Test Steps`, `Notes`. `Compliance Score` must parse as a number;
//! failure aborts the whole load.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;

use compass_core::{ComplianceStatus, RequirementId, RequirementRecord};

use crate::error::{StoreError, StoreResult};

/// One raw CSV row, exactly as the converter emits it.
///
/// Every field is read as text; typed parsing happens after the blank-ID
/// drop so a discarded row can never corrupt the load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Section")]
    section: String,
    #[serde(rename = "Main Category")]
    category: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Compliance Score")]
    compliance_score: String,
    #[serde(rename = "Requirement")]
    requirement: String,
    #[serde(rename = "Test Steps")]
    test_steps: String,
    #[serde(rename = "Notes")]
    notes: String,
}

/// Loads and memoizes the immutable requirement snapshot.
///
/// Construction captures the path without touching the filesystem; the
/// first [`load`](RecordStore::load) reads and caches the snapshot for the
/// lifetime of the store. Initialization is guarded, so concurrent first
/// callers cannot double-read the source.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: OnceCell<Vec<RequirementRecord>>,
}

impl RecordStore {
    /// Create a store backed by the CSV snapshot at `path`. No IO happens
    /// here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: OnceCell::new(),
        }
    }

    /// The path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full ordered snapshot, read from the source on first call and
    /// cached thereafter.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DataUnavailable`] if the source file does not exist.
    /// - [`StoreError::DataCorrupt`] if any retained row fails to parse —
    ///   the whole load fails rather than skipping the row.
    pub fn load(&self) -> StoreResult<&[RequirementRecord]> {
        self.records
            .get_or_try_init(|| read_records(&self.path))
            .map(Vec::as_slice)
    }

    /// Linear lookup by exact identifier match. Absence is not an error.
    pub fn get(&self, id: &str) -> StoreResult<Option<&RequirementRecord>> {
        Ok(self.load()?.iter().find(|rec| rec.id.as_str() == id))
    }
}

/// Read and parse the snapshot. Source order is preserved; rows with a
/// blank `ID` are dropped before any typed parsing.
fn read_records(path: &Path) -> StoreResult<Vec<RequirementRecord>> {
    if !path.exists() {
        return Err(StoreError::DataUnavailable {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| open_error(path, e))?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        let row_number = index as u64 + 1;
        let row = row.map_err(|e| StoreError::DataCorrupt {
            path: path.to_path_buf(),
            row: row_number,
            detail: e.to_string(),
        })?;

        let id = row.id.trim();
        if id.is_empty() {
            tracing::debug!(row = row_number, "dropping row with blank ID");
            continue;
        }

        let compliance_score: f64 = row.compliance_score.trim().parse().map_err(
            |e: std::num::ParseFloatError| StoreError::DataCorrupt {
                path: path.to_path_buf(),
                row: row_number,
                detail: format!(
                    "compliance score {:?} is not numeric: {e}",
                    row.compliance_score
                ),
            },
        )?;

        let id = RequirementId::new(id).map_err(|e| StoreError::DataCorrupt {
            path: path.to_path_buf(),
            row: row_number,
            detail: e.to_string(),
        })?;

        records.push(RequirementRecord {
            id,
            section: row.section.trim().to_string(),
            category: row.category.trim().to_string(),
            status: ComplianceStatus::from_label(row.status.trim()),
            compliance_score,
            requirement: row.requirement.trim().to_string(),
            test_steps: row.test_steps.trim().to_string(),
            notes: row.notes.trim().to_string(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "loaded requirement snapshot"
    );
    Ok(records)
}

/// Map a reader-open failure onto the store taxonomy.
fn open_error(path: &Path, err: csv::Error) -> StoreError {
    match err.into_kind() {
        csv::ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
            StoreError::DataUnavailable {
                path: path.to_path_buf(),
            }
        }
        csv::ErrorKind::Io(e) => StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        },
        other => StoreError::DataCorrupt {
            path: path.to_path_buf(),
            row: 0,
            detail: format!("{other:?}"),
        },
    }
}
