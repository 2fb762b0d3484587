//! Property-based tests for comparison and range analysis.

use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

use portdelta_core::compare::compare;
use portdelta_core::model::{ChangeSummary, ChangeType, SecurityRecord, Snapshot};
use portdelta_core::range::{compare_range, PairFailurePolicy, RangeOptions};
use portdelta_core::SnapshotSet;

// =============================================================================
// Generators
// =============================================================================

/// Holdings drawn from a small ISIN pool so that snapshots overlap.
fn arb_holdings(min_value: f64) -> impl Strategy<Value = BTreeMap<String, f64>> {
    proptest::collection::btree_map("INE00[0-9]", min_value..1_000_000.0f64, 0..8)
}

fn to_snapshot(month: &str, holdings: &BTreeMap<String, f64>) -> Snapshot {
    let securities = holdings
        .iter()
        .map(|(isin, value)| {
            (
                isin.clone(),
                SecurityRecord::new(format!("Security {isin}"), "Banks", 1.0, *value, 0.5),
            )
        })
        .collect();
    Snapshot::new(month.parse().unwrap(), securities)
}

const MONTHS: [&str; 6] = [
    "January 2024",
    "February 2024",
    "March 2024",
    "April 2024",
    "May 2024",
    "June 2024",
];

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every ISIN in either snapshot gets exactly one change, and the five
    /// counters sum to that number.
    #[test]
    fn prop_changes_cover_isin_union(
        start in arb_holdings(0.0),
        end in arb_holdings(0.0),
    ) {
        let set: SnapshotSet = [to_snapshot(MONTHS[0], &start), to_snapshot(MONTHS[1], &end)]
            .into_iter()
            .collect();

        let result = compare(&set, MONTHS[0], MONTHS[1]).unwrap();

        let union: BTreeSet<&String> = start.keys().chain(end.keys()).collect();
        prop_assert_eq!(result.changes.len(), union.len());
        prop_assert_eq!(result.summary.classified_total(), union.len());
    }

    /// Entries carry no start metrics, exits no end metrics, with the fixed
    /// +100 / -100 percentages.
    #[test]
    fn prop_entry_and_exit_shape(
        start in arb_holdings(0.0),
        end in arb_holdings(0.0),
    ) {
        let set: SnapshotSet = [to_snapshot(MONTHS[0], &start), to_snapshot(MONTHS[1], &end)]
            .into_iter()
            .collect();

        let result = compare(&set, MONTHS[0], MONTHS[1]).unwrap();

        for (isin, entry) in &result.changes {
            match entry.change.change_type() {
                ChangeType::NewEntry => {
                    prop_assert!(!start.contains_key(isin));
                    prop_assert!(entry.change.old_metrics().is_none());
                    prop_assert_eq!(entry.change.percentage_change(), 100.0);
                }
                ChangeType::Exit => {
                    prop_assert!(!end.contains_key(isin));
                    prop_assert!(entry.change.new_metrics().is_none());
                    prop_assert_eq!(entry.change.percentage_change(), -100.0);
                }
                _ => {
                    prop_assert!(entry.change.old_metrics().is_some());
                    prop_assert!(entry.change.new_metrics().is_some());
                }
            }
        }
    }

    /// Comparing a snapshot with itself reports nothing but unchanged
    /// positions. Zero market values are excluded since 0 -> 0 is an
    /// infinite increase.
    #[test]
    fn prop_self_comparison_is_no_change(holdings in arb_holdings(1.0)) {
        let set: SnapshotSet = [to_snapshot(MONTHS[0], &holdings)].into_iter().collect();

        let result = compare(&set, MONTHS[0], MONTHS[0]).unwrap();

        prop_assert_eq!(result.summary.no_change, holdings.len());
        prop_assert_eq!(result.summary.classified_total(), holdings.len());
        prop_assert_eq!(result.summary.total_value_change, 0.0);
    }

    /// A range over N months yields N-1 pairwise results whose field-wise
    /// sum is the range summary.
    #[test]
    fn prop_range_aggregates_pairwise_results(
        months in proptest::collection::vec(arb_holdings(0.0), 2..=MONTHS.len()),
        parallel in any::<bool>(),
    ) {
        let set: SnapshotSet = months
            .iter()
            .zip(MONTHS)
            .map(|(holdings, month)| to_snapshot(month, holdings))
            .collect();
        let last = MONTHS[months.len() - 1];
        let options = RangeOptions::new(PairFailurePolicy::FailRange).with_parallel(parallel);

        let result = compare_range(&set, MONTHS[0], last, &options).unwrap();

        prop_assert_eq!(result.monthly_changes.len(), months.len() - 1);
        let mut expected = ChangeSummary::default();
        for month in &result.monthly_changes {
            expected.accumulate(&month.summary);
        }
        prop_assert_eq!(result.summary, expected);
    }
}
