//! # compass-core — Foundational Types for the COMPASS Stack
//!
//! COMPASS (Compliance Posture Assessment Stack) evaluates a static snapshot
//! of compliance-requirement records: aggregate posture, filtered views, and
//! what-if remediation projections. This crate defines the value types every
//! other crate in the workspace operates on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated identifier newtype.** [`RequirementId`] rejects blank
//!    input at construction. No bare strings for identifiers.
//!
//! 2. **Open status taxonomy.** [`ComplianceStatus`] names the three
//!    canonical evaluation outcomes but passes any other literal through
//!    unchanged via `Other`. The source dataset is not ours to correct.
//!
//! 3. **Immutable records.** [`RequirementRecord`] is a plain value; every
//!    hypothetical mutation ([`RequirementRecord::with_remediated`]) derives
//!    a new value and leaves the original untouched.
//!
//! 4. **Single source of truth for scores.** Risk severity is a computed
//!    accessor over `compliance_score`, never a stored field, and `status`
//!    is never reconciled against the stored score.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `compass-*` crates (leaf of the DAG).
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, `Serialize`, `Deserialize`.

pub mod error;
pub mod record;
pub mod status;

pub use error::ValidationError;
pub use record::{RequirementId, RequirementRecord, FULL_COMPLIANCE_SCORE};
pub use status::ComplianceStatus;
