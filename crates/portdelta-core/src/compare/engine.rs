//! Snapshot comparison computation.
//!
//! The core entry point is [`compare`], which resolves two month keys
//! against a [`SnapshotSource`] and produces a [`ComparisonResult`].
//! [`compare_snapshots`] does the same for snapshots already in hand.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::Result;
use crate::model::{
    ChangeEntry, ChangeSummary, ComparisonResult, HeldChange, SecurityChange, SecurityRecord,
    Snapshot,
};
use crate::rules::validate_snapshot;
use crate::source::{resolve, SnapshotSource};

/// Absolute percentage change below which a held position counts as unchanged
pub const NO_CHANGE_THRESHOLD_PCT: f64 = 0.1;

/// Percentage change of a held position
///
/// `value_change / old_value * 100` for a non-zero base. Against a zero base
/// the result is an infinite sentinel whose sign follows `value_change`;
/// a zero change against a zero base yields `+inf`.
pub fn percentage_change(old_value: f64, value_change: f64) -> f64 {
    if old_value != 0.0 {
        value_change / old_value * 100.0
    } else if value_change < 0.0 {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    }
}

/// Classify one security given its start-side and end-side records
///
/// Returns `None` only when the security is absent from both sides.
pub fn classify_change(
    start: Option<&SecurityRecord>,
    end: Option<&SecurityRecord>,
) -> Option<SecurityChange> {
    match (start, end) {
        (None, None) => None,
        (None, Some(end)) => Some(SecurityChange::NewEntry {
            new_metrics: end.metrics.clone(),
        }),
        (Some(start), None) => Some(SecurityChange::Exit {
            old_metrics: start.metrics.clone(),
        }),
        (Some(start), Some(end)) => {
            let old_value = start.metrics.market_value;
            let value_change = end.metrics.market_value - old_value;
            let pct = percentage_change(old_value, value_change);

            let held = HeldChange {
                old_metrics: start.metrics.clone(),
                new_metrics: end.metrics.clone(),
                percentage_change: pct,
                value_change,
            };

            Some(if pct.abs() < NO_CHANGE_THRESHOLD_PCT {
                SecurityChange::NoChange(held)
            } else if pct > 0.0 {
                SecurityChange::Increased(held)
            } else {
                SecurityChange::Decreased(held)
            })
        }
    }
}

/// Compare two snapshots already resolved by the caller
///
/// `start_month` / `end_month` are recorded verbatim in the result.
///
/// # Errors
///
/// - `Computation`: either snapshot fails validation (non-finite metrics,
///   negative quantity, non-finite total)
pub fn compare_snapshots(
    start_month: &str,
    start: &Snapshot,
    end_month: &str,
    end: &Snapshot,
    analysis_timestamp: DateTime<Utc>,
) -> Result<ComparisonResult> {
    validate_snapshot(start_month, start)?;
    validate_snapshot(end_month, end)?;

    let isins: BTreeSet<&String> = start
        .securities()
        .keys()
        .chain(end.securities().keys())
        .collect();

    let mut summary = ChangeSummary {
        total_value_change: end.total_value() - start.total_value(),
        ..ChangeSummary::default()
    };
    let mut changes = BTreeMap::new();

    for isin in isins {
        let start_record = start.get(isin);
        let end_record = end.get(isin);
        let Some(change) = classify_change(start_record, end_record) else {
            continue;
        };

        let name = end_record
            .or(start_record)
            .map(|r| r.name.clone())
            .unwrap_or_default();

        summary.record(change.change_type());
        changes.insert(isin.clone(), ChangeEntry { name, change });
    }

    tracing::debug!(
        start_month,
        end_month,
        security_count = changes.len(),
        new_entries = summary.new_entries,
        exits = summary.exits,
        "compared snapshots"
    );

    Ok(ComparisonResult {
        start_month: start_month.to_string(),
        end_month: end_month.to_string(),
        analysis_timestamp,
        summary,
        changes,
    })
}

/// Compare the snapshots recorded under two month keys
///
/// # Errors
///
/// - `InvalidInput`: either key does not resolve in `source`
/// - `Computation`: either snapshot fails validation
pub fn compare<S: SnapshotSource + ?Sized>(
    source: &S,
    start_month: &str,
    end_month: &str,
) -> Result<ComparisonResult> {
    compare_at(source, start_month, end_month, Utc::now())
}

/// [`compare`] with an explicit analysis timestamp
pub(crate) fn compare_at<S: SnapshotSource + ?Sized>(
    source: &S,
    start_month: &str,
    end_month: &str,
    analysis_timestamp: DateTime<Utc>,
) -> Result<ComparisonResult> {
    let start = resolve(source, start_month)?;
    let end = resolve(source, end_month)?;
    compare_snapshots(start_month, start, end_month, end, analysis_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChangeType;

    fn record(market_value: f64) -> SecurityRecord {
        SecurityRecord::new("Alpha", "Banks", 10.0, market_value, 1.0)
    }

    fn classify(old: f64, new: f64) -> SecurityChange {
        classify_change(Some(&record(old)), Some(&record(new))).unwrap()
    }

    #[test]
    fn test_percentage_change_formula() {
        assert_eq!(percentage_change(100.0, 50.0), 50.0);
        assert_eq!(percentage_change(200.0, -50.0), -25.0);
    }

    #[test]
    fn test_percentage_change_zero_base_sentinels() {
        assert_eq!(percentage_change(0.0, 50.0), f64::INFINITY);
        assert_eq!(percentage_change(0.0, -50.0), f64::NEG_INFINITY);
        assert_eq!(percentage_change(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn test_threshold_boundary() {
        // 0.1% exactly is not below the threshold
        assert_eq!(classify(1000.0, 1001.0).change_type(), ChangeType::Increased);
        assert_eq!(classify(1000.0, 1000.5).change_type(), ChangeType::NoChange);
        assert_eq!(classify(1000.0, 999.5).change_type(), ChangeType::NoChange);
        assert_eq!(classify(1000.0, 998.0).change_type(), ChangeType::Decreased);
    }

    #[test]
    fn test_absent_on_both_sides() {
        assert!(classify_change(None, None).is_none());
    }

    #[test]
    fn test_name_prefers_end_record() {
        let mut start = BTreeMap::new();
        start.insert(
            "INE001".to_string(),
            SecurityRecord::new("Old Name Ltd", "Banks", 1.0, 100.0, 1.0),
        );
        let mut end = BTreeMap::new();
        end.insert(
            "INE001".to_string(),
            SecurityRecord::new("New Name Ltd", "Banks", 1.0, 100.0, 1.0),
        );
        let start = Snapshot::new("January 2024".parse().unwrap(), start);
        let end = Snapshot::new("February 2024".parse().unwrap(), end);

        let result =
            compare_snapshots("January 2024", &start, "February 2024", &end, Utc::now()).unwrap();
        assert_eq!(result.changes["INE001"].name, "New Name Ltd");
    }
}
