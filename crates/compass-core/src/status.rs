//! # Compliance Status — Open Evaluation Outcome
//!
//! The source questionnaire evaluates each requirement as one of three
//! canonical outcomes: `Met`, `Partially Meets`, `Does Not Meet`. Real
//! exports occasionally carry other literals, and the core must tolerate
//! them rather than reject the row — so the taxonomy is deliberately open:
//! non-canonical labels round-trip verbatim through [`ComplianceStatus::Other`].
//!
//! ## Invariant
//!
//! Canonical parsing is exact-match on the canonical labels. Case-insensitive
//! comparison belongs to filtering and simulator selection, never here, so a
//! literal like `"met"` stays `Other("met")` and is counted under `"met"` in
//! status tallies.

use serde::{Deserialize, Serialize};

/// Canonical label for a fully satisfied requirement.
pub const STATUS_MET: &str = "Met";
/// Canonical label for a partially satisfied requirement.
pub const STATUS_PARTIALLY_MEETS: &str = "Partially Meets";
/// Canonical label for an unsatisfied requirement.
pub const STATUS_DOES_NOT_MEET: &str = "Does Not Meet";

/// Evaluation outcome for a single requirement.
///
/// Serializes to and from its label string, preserving non-canonical
/// literals exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplianceStatus {
    /// Requirement is fully satisfied.
    Met,
    /// Requirement is partially satisfied.
    PartiallyMeets,
    /// Requirement is not satisfied.
    DoesNotMeet,
    /// Any other literal from the source, preserved verbatim.
    Other(String),
}

impl ComplianceStatus {
    /// Parse a status label. Canonical labels map to their variants;
    /// anything else is preserved in `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            STATUS_MET => Self::Met,
            STATUS_PARTIALLY_MEETS => Self::PartiallyMeets,
            STATUS_DOES_NOT_MEET => Self::DoesNotMeet,
            other => Self::Other(other.to_string()),
        }
    }

    /// The literal label for this status.
    pub fn label(&self) -> &str {
        match self {
            Self::Met => STATUS_MET,
            Self::PartiallyMeets => STATUS_PARTIALLY_MEETS,
            Self::DoesNotMeet => STATUS_DOES_NOT_MEET,
            Self::Other(label) => label,
        }
    }

    /// The three canonical statuses in canonical reporting order.
    pub fn canonical() -> &'static [ComplianceStatus] {
        &[Self::Met, Self::PartiallyMeets, Self::DoesNotMeet]
    }

    /// Whether this is one of the three canonical outcomes.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The score conventionally implied by a canonical status
    /// (100 / 50 / 0). `None` for non-canonical literals.
    ///
    /// Informational only: stored scores and statuses are independent in
    /// the source data and the core never reconciles them.
    pub fn nominal_score(&self) -> Option<f64> {
        match self {
            Self::Met => Some(100.0),
            Self::PartiallyMeets => Some(50.0),
            Self::DoesNotMeet => Some(0.0),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for ComplianceStatus {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ComplianceStatus> for String {
    fn from(status: ComplianceStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
