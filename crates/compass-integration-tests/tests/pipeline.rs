//! End-to-end pipeline tests: CSV fixture → RecordStore → filter →
//! aggregate → simulate, as a presentation collaborator would drive them.

use std::io::Write;

use tempfile::NamedTempFile;

use compass_core::ComplianceStatus;
use compass_metrics::{
    category_scores, filter_records, overall_score, projected_delta, projected_score,
    records_by_status, simulated_view, status_counts, FilterCriteria,
};
use compass_store::{RecordStore, StoreError};

const HEADER: &str =
    "ID,Section,Main Category,Status,Compliance Score,Requirement,Test Steps,Notes";

fn write_fixture(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// The two-record reference scenario: one CIP gap, one met CDD control.
fn reference_fixture() -> NamedTempFile {
    write_fixture(&[
        "A,Customer Identification,CIP,Does Not Meet,40,Collect identifying information,Sampled 25 files,\"missing date of birth, address\"",
        "B,Customer Due Diligence,CDD,Met,80,Risk-rate each customer,Reviewed methodology,",
    ])
}

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[test]
fn reference_scenario_end_to_end() {
    let file = reference_fixture();
    let store = RecordStore::new(file.path());
    let records = store.load().unwrap();

    assert_eq!(overall_score(records), 60.0);

    let categories = category_scores(records);
    let keys: Vec<&String> = categories.keys().collect();
    assert_eq!(keys, ["CIP", "CDD"]);
    assert_eq!(categories["CIP"], 40.0);
    assert_eq!(categories["CDD"], 80.0);

    let counts = status_counts(records);
    assert_eq!(counts["Met"], 1);
    assert_eq!(counts["Partially Meets"], 0);
    assert_eq!(counts["Does Not Meet"], 1);

    assert_eq!(projected_score(records, &strings(&["A"])), 90.0);

    let met_only = filter_records(records, &FilterCriteria::new(&strings(&["Met"]), &[], ""));
    assert_eq!(met_only.len(), 1);
    assert_eq!(met_only[0].id.as_str(), "B");
}

#[test]
fn quoted_csv_fields_survive_ingestion() {
    let file = reference_fixture();
    let store = RecordStore::new(file.path());
    let records = store.load().unwrap();

    assert_eq!(records[0].notes, "missing date of birth, address");
}

#[test]
fn met_status_with_partial_score_is_never_reconciled() {
    // Record B is "Met" with a stored score of 80. The pipeline must carry
    // both through untouched: counts see Met, the mean sees 80.
    let file = reference_fixture();
    let store = RecordStore::new(file.path());
    let records = store.load().unwrap();

    let b = store.get("B").unwrap().unwrap();
    assert_eq!(b.status, ComplianceStatus::Met);
    assert_eq!(b.compliance_score, 80.0);
    assert_eq!(b.risk_severity(), 20.0);

    // Remediating B anyway lifts the mean: (40 + 100) / 2.
    assert_eq!(projected_score(records, &strings(&["B"])), 70.0);
}

#[test]
fn simulated_view_drives_downstream_recomputation() {
    let file = reference_fixture();
    let store = RecordStore::new(file.path());
    let records = store.load().unwrap();

    let view = simulated_view(records, &strings(&["a"]));
    let counts = status_counts(&view);
    assert_eq!(counts["Met"], 2);
    assert_eq!(counts["Does Not Meet"], 0);

    assert_eq!(projected_delta(records, &strings(&["a"])), 30.0);

    // The store's snapshot is unchanged by the simulation.
    let counts_after = status_counts(store.load().unwrap());
    assert_eq!(counts_after["Does Not Meet"], 1);
}

#[test]
fn filtered_subsets_aggregate_independently() {
    let file = write_fixture(&[
        "CIP-1,Identity,CIP,Met,100,Verify identity,,",
        "CIP-2,Identity,CIP,Does Not Meet,0,Retain records,,",
        "CDD-1,Due Diligence,CDD,Partially Meets,50,Risk-rate customers,,",
    ]);
    let store = RecordStore::new(file.path());
    let records = store.load().unwrap();

    let cip = filter_records(records, &FilterCriteria::new(&[], &strings(&["CIP"]), ""));
    assert_eq!(overall_score(&cip), 50.0);
    assert_eq!(overall_score(records), 50.0);

    let gaps = filter_records(
        records,
        &FilterCriteria::new(&strings(&["Does Not Meet", "Partially Meets"]), &[], ""),
    );
    assert_eq!(overall_score(&gaps), 25.0);

    let grouped = records_by_status(records);
    assert_eq!(grouped["Met"].len(), 1);
    assert_eq!(grouped["Partially Meets"].len(), 1);
    assert_eq!(grouped["Does Not Meet"].len(), 1);
}

#[test]
fn load_failures_surface_before_any_metric() {
    let store = RecordStore::new("/nonexistent/compliance.csv");
    assert!(matches!(
        store.load(),
        Err(StoreError::DataUnavailable { .. })
    ));

    let corrupt = write_fixture(&["CIP-1,Identity,CIP,Met,n/a,Verify identity,,"]);
    let store = RecordStore::new(corrupt.path());
    assert!(matches!(store.load(), Err(StoreError::DataCorrupt { .. })));
}
