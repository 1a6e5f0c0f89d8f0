//! # Requirement Records
//!
//! The immutable value at the heart of the stack: one compliance-control
//! evaluation entry, constructed once at load time and never mutated.
//! What-if remediation derives new values via
//! [`RequirementRecord::with_remediated`].
//!
//! ## Status/Score Independence
//!
//! `status` and `compliance_score` are stored independently and are never
//! cross-validated: a record may carry `status = Met` with a score below
//! 100. That is a property of the source dataset, preserved as-is.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::status::ComplianceStatus;

/// The score representing full compliance with a requirement.
pub const FULL_COMPLIANCE_SCORE: f64 = 100.0;

/// Identifier of a requirement record.
///
/// Non-empty by construction; uniqueness across a dataset is assumed from
/// the source, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequirementId(String);

impl RequirementId {
    /// Create an identifier, rejecting empty or whitespace-only input.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyRequirementId);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequirementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One compliance-requirement evaluation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Unique identifier from the source dataset.
    pub id: RequirementId,
    /// Free-text section label.
    pub section: String,
    /// Category code. Two codes occur in practice (identity-verification
    /// vs. due-diligence controls) but the set is open.
    pub category: String,
    /// Evaluation outcome.
    pub status: ComplianceStatus,
    /// Measured compliance percentage, conventionally in [0, 100].
    pub compliance_score: f64,
    /// Requirement text.
    pub requirement: String,
    /// Test steps performed during evaluation.
    pub test_steps: String,
    /// Free-text notes.
    pub notes: String,
}

impl RequirementRecord {
    /// Risk severity derived from the compliance score:
    /// `100 − compliance_score`. Computed, never stored.
    pub fn risk_severity(&self) -> f64 {
        FULL_COMPLIANCE_SCORE - self.compliance_score
    }

    /// A derived copy with this requirement treated as fully remediated:
    /// status forced to `Met`, score forced to 100. The original value is
    /// untouched.
    pub fn with_remediated(&self) -> Self {
        Self {
            status: ComplianceStatus::Met,
            compliance_score: FULL_COMPLIANCE_SCORE,
            ..self.clone()
        }
    }
}
