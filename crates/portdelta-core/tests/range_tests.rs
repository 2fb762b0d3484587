#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::BTreeMap;

use common::{fail_options, single, skip_options, snapshot, snapshot_set};
use portdelta_core::errors::ExErrorKind;
use portdelta_core::logging_facility::test_capture::init_test_capture;
use portdelta_core::model::{ChangeSummary, Snapshot};
use portdelta_core::range::compare_range;

fn quarter() -> portdelta_core::SnapshotSet {
    snapshot_set(vec![
        snapshot(
            "January 2024",
            &[("INE001", "Alpha", 100.0), ("INE002", "Beta", 50.0)],
        ),
        snapshot(
            "February 2024",
            &[("INE001", "Alpha", 150.0), ("INE003", "Gamma", 30.0)],
        ),
        snapshot(
            "March 2024",
            &[("INE001", "Alpha", 120.0), ("INE003", "Gamma", 30.0)],
        ),
    ])
}

#[test]
fn test_range_yields_one_result_per_adjacent_pair() {
    let set = quarter();

    let result = compare_range(&set, "January 2024", "March 2024", &skip_options()).unwrap();

    assert_eq!(result.monthly_changes.len(), 2);
    assert_eq!(result.monthly_changes[0].start_month, "January 2024");
    assert_eq!(result.monthly_changes[0].end_month, "February 2024");
    assert_eq!(result.monthly_changes[1].start_month, "February 2024");
    assert_eq!(result.monthly_changes[1].end_month, "March 2024");
    assert!(result.skipped_pairs.is_empty());
}

#[test]
fn test_range_summary_is_field_wise_sum() {
    let set = quarter();

    let result = compare_range(&set, "January 2024", "March 2024", &skip_options()).unwrap();

    let mut expected = ChangeSummary::default();
    for month in &result.monthly_changes {
        expected.accumulate(&month.summary);
    }
    assert_eq!(result.summary, expected);

    // Jan->Feb: Alpha up, Beta out, Gamma in. Feb->Mar: Alpha down, Gamma flat.
    assert_eq!(result.summary.increases, 1);
    assert_eq!(result.summary.exits, 1);
    assert_eq!(result.summary.new_entries, 1);
    assert_eq!(result.summary.decreases, 1);
    assert_eq!(result.summary.no_change, 1);
    assert_eq!(result.summary.total_value_change, 0.0);
}

#[test]
fn test_range_orders_months_chronologically_not_lexically() {
    // "April" sorts before "February" lexically
    let set = snapshot_set(vec![
        single("April 2024", 10.0),
        single("February 2024", 10.0),
        single("March 2024", 10.0),
        single("December 2023", 10.0),
    ]);

    let result = compare_range(&set, "December 2023", "April 2024", &skip_options()).unwrap();

    let pairs: Vec<(&str, &str)> = result
        .monthly_changes
        .iter()
        .map(|m| (m.start_month.as_str(), m.end_month.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [
            ("December 2023", "February 2024"),
            ("February 2024", "March 2024"),
            ("March 2024", "April 2024"),
        ]
    );
}

#[test]
fn test_range_sub_window_excludes_outer_months() {
    let set = quarter();

    let result = compare_range(&set, "February 2024", "March 2024", &skip_options()).unwrap();

    assert_eq!(result.monthly_changes.len(), 1);
    assert_eq!(result.start_month, "February 2024");
    assert_eq!(result.end_month, "March 2024");
}

#[test]
fn test_reversed_range_is_ordering_error() {
    let set = quarter();

    let err = compare_range(&set, "March 2024", "January 2024", &skip_options()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Ordering);
    assert_eq!(err.code(), "ERR_ORDERING");
}

#[test]
fn test_unparseable_known_key_is_invalid_input() {
    let mut map: BTreeMap<String, Snapshot> = BTreeMap::new();
    map.insert("January 2024".to_string(), single("January 2024", 1.0));
    map.insert("February 2024".to_string(), single("February 2024", 1.0));
    map.insert("latest".to_string(), single("March 2024", 1.0));

    let err = compare_range(&map, "January 2024", "February 2024", &skip_options()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(err.month_key(), Some("latest"));
}

#[test]
fn test_failed_pair_is_skipped_and_recorded() {
    let capture = init_test_capture();
    let set = snapshot_set(vec![
        single("May 2023", 10.0),
        single("June 2023", f64::INFINITY),
        single("July 2023", 30.0),
    ]);

    let result = compare_range(&set, "May 2023", "July 2023", &skip_options()).unwrap();

    // Both pairs touch the malformed June snapshot
    assert!(result.monthly_changes.is_empty());
    assert_eq!(result.skipped_pairs.len(), 2);
    assert_eq!(result.skipped_pairs[0].start_month, "May 2023");
    assert_eq!(result.skipped_pairs[0].error_code, "ERR_COMPUTATION");
    assert_eq!(result.summary, ChangeSummary::default());

    let warnings: Vec<_> = capture
        .warnings()
        .into_iter()
        .filter(|e| e.field("start_month") == Some("May 2023"))
        .collect();
    assert!(!warnings.is_empty(), "skipped pair should be logged at WARN");
    assert_eq!(warnings[0].error_code(), Some("ERR_COMPUTATION"));
}

#[test]
fn test_failed_pair_excluded_from_aggregate() {
    let set = snapshot_set(vec![
        single("May 2023", 10.0),
        single("June 2023", 20.0),
        single("July 2023", f64::NAN),
    ]);

    let result = compare_range(&set, "May 2023", "July 2023", &skip_options()).unwrap();

    assert_eq!(result.monthly_changes.len(), 1);
    assert_eq!(result.skipped_pairs.len(), 1);
    assert_eq!(result.skipped_pairs[0].end_month, "July 2023");
    assert_eq!(result.summary.increases, 1);
    assert_eq!(result.summary.total_value_change, 10.0);
}

#[test]
fn test_fail_range_policy_propagates_first_error() {
    let set = snapshot_set(vec![
        single("May 2023", 10.0),
        single("June 2023", 20.0),
        single("July 2023", f64::NAN),
    ]);

    let err = compare_range(&set, "May 2023", "July 2023", &fail_options()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Computation);
    assert_eq!(err.month_key(), Some("July 2023"));
}

#[test]
fn test_parallel_range_matches_sequential() {
    let months = [
        "January 2024",
        "February 2024",
        "March 2024",
        "April 2024",
        "May 2024",
        "June 2024",
    ];
    let set = snapshot_set(
        months
            .iter()
            .enumerate()
            .map(|(i, m)| {
                snapshot(
                    m,
                    &[
                        ("INE001", "Alpha", 100.0 + i as f64 * 10.0),
                        ("INE002", "Beta", if i % 2 == 0 { 50.0 } else { 40.0 }),
                    ],
                )
            })
            .collect(),
    );

    let sequential = compare_range(&set, "January 2024", "June 2024", &skip_options()).unwrap();
    let parallel = compare_range(
        &set,
        "January 2024",
        "June 2024",
        &skip_options().with_parallel(true),
    )
    .unwrap();

    assert_eq!(parallel.monthly_changes.len(), 5);
    assert_eq!(parallel.summary, sequential.summary);
    for (p, s) in parallel.monthly_changes.iter().zip(&sequential.monthly_changes) {
        assert_eq!(p.start_month, s.start_month);
        assert_eq!(p.changes, s.changes);
    }
}

#[test]
fn test_pairwise_results_share_range_timestamp() {
    let set = quarter();

    let result = compare_range(&set, "January 2024", "March 2024", &skip_options()).unwrap();

    assert!(result
        .monthly_changes
        .iter()
        .all(|m| m.analysis_timestamp == result.analysis_timestamp));
}
