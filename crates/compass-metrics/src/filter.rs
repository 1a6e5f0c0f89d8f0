//! # Filtering — Order-Preserving Subsequence Selection
//!
//! A record is retained iff it passes all three constraints (logical AND):
//! status set, category set, and free-text query. Empty sets and blank
//! queries mean "no constraint", never "match nothing". Comparison is
//! case-insensitive throughout; the input is never reordered or
//! deduplicated.

use std::collections::HashSet;

use compass_core::RequirementRecord;

/// Normalized filter constraints.
///
/// Normalization happens once at construction: set entries are lowercased
/// with blank entries discarded, the query is trimmed and lowercased.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    statuses: HashSet<String>,
    categories: HashSet<String>,
    query: String,
}

impl FilterCriteria {
    /// Build criteria from raw status labels, category labels, and a
    /// free-text query.
    pub fn new(statuses: &[String], categories: &[String], query: &str) -> Self {
        Self {
            statuses: normalize_set(statuses),
            categories: normalize_set(categories),
            query: query.trim().to_lowercase(),
        }
    }

    /// Whether a record passes every constraint.
    pub fn matches(&self, record: &RequirementRecord) -> bool {
        if !self.statuses.is_empty()
            && !self.statuses.contains(&record.status.label().to_lowercase())
        {
            return false;
        }
        if !self.categories.is_empty()
            && !self.categories.contains(&record.category.to_lowercase())
        {
            return false;
        }
        if !self.query.is_empty() {
            let haystack = [
                record.id.as_str(),
                record.section.as_str(),
                record.requirement.as_str(),
                record.notes.as_str(),
            ]
            .join(" ")
            .to_lowercase();
            if !haystack.contains(&self.query) {
                return false;
            }
        }
        true
    }
}

fn normalize_set(labels: &[String]) -> HashSet<String> {
    labels
        .iter()
        .filter(|label| !label.trim().is_empty())
        .map(|label| label.to_lowercase())
        .collect()
}

/// The order-preserving subsequence of `records` matching `criteria`.
///
/// Pure: the input is untouched and the output is freshly allocated.
pub fn filter_records(
    records: &[RequirementRecord],
    criteria: &FilterCriteria,
) -> Vec<RequirementRecord> {
    let matched: Vec<RequirementRecord> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();
    tracing::debug!(
        total = records.len(),
        matched = matched.len(),
        "filtered requirement records"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    use compass_core::{ComplianceStatus, RequirementId};

    fn record(id: &str, category: &str, status: &str, notes: &str) -> RequirementRecord {
        RequirementRecord {
            id: RequirementId::new(id).unwrap(),
            section: "Onboarding".to_string(),
            category: category.to_string(),
            status: ComplianceStatus::from_label(status),
            compliance_score: 50.0,
            requirement: "Verify customer identity".to_string(),
            test_steps: String::new(),
            notes: notes.to_string(),
        }
    }

    fn strings(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Vec<RequirementRecord> {
        vec![
            record("CIP-1", "CIP", "Met", ""),
            record("CDD-1", "CDD", "Does Not Meet", "escalated to compliance"),
            record("CIP-2", "CIP", "Partially Meets", "pending evidence"),
        ]
    }

    #[test]
    fn unconstrained_filter_is_identity() {
        let records = sample();
        let criteria = FilterCriteria::new(&[], &[], "");
        assert_eq!(filter_records(&records, &criteria), records);
    }

    #[test]
    fn constraints_combine_with_logical_and() {
        let records = sample();
        let criteria =
            FilterCriteria::new(&strings(&["Partially Meets"]), &strings(&["CIP"]), "pending");
        let matched = filter_records(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "CIP-2");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let records = sample();
        let criteria = FilterCriteria::new(&strings(&["met"]), &strings(&["cip"]), "VERIFY");
        let matched = filter_records(&records, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.as_str(), "CIP-1");
    }

    #[test]
    fn query_searches_id_section_requirement_and_notes() {
        let records = sample();

        let by_id = filter_records(&records, &FilterCriteria::new(&[], &[], "cdd-1"));
        assert_eq!(by_id.len(), 1);

        let by_notes = filter_records(&records, &FilterCriteria::new(&[], &[], "escalated"));
        assert_eq!(by_notes.len(), 1);
        assert_eq!(by_notes[0].id.as_str(), "CDD-1");

        // test_steps is not part of the haystack.
        let mut with_steps = sample();
        with_steps[0].test_steps = "zzz-marker".to_string();
        let by_steps = filter_records(&with_steps, &FilterCriteria::new(&[], &[], "zzz-marker"));
        assert!(by_steps.is_empty());
    }

    #[test]
    fn blank_set_entries_impose_no_constraint() {
        let records = sample();
        let criteria = FilterCriteria::new(&strings(&["", "  "]), &[], "   ");
        assert_eq!(filter_records(&records, &criteria), records);
    }

    #[test]
    fn output_preserves_input_order() {
        let records = sample();
        let criteria = FilterCriteria::new(&[], &strings(&["CIP"]), "");
        let matched = filter_records(&records, &criteria);
        assert_eq!(matched[0].id.as_str(), "CIP-1");
        assert_eq!(matched[1].id.as_str(), "CIP-2");
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria::new(&strings(&["Met", "Partially Meets"]), &[], "");
        let once = filter_records(&records, &criteria);
        let twice = filter_records(&once, &criteria);
        assert_eq!(once, twice);
    }
}
