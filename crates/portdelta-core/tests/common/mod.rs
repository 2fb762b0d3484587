use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use portdelta_core::model::{SecurityRecord, Snapshot};
use portdelta_core::{PairFailurePolicy, RangeOptions, SnapshotSet};

/// Build a security record with fixed quantity and NAV
#[allow(dead_code)]
pub fn security(name: &str, market_value: f64) -> SecurityRecord {
    SecurityRecord::new(name, "Banks", 10.0, market_value, 1.0)
}

/// Build a snapshot for `month` from `(isin, name, market_value)` rows
///
/// `total_value` is the sum of the market values.
#[allow(dead_code)]
pub fn snapshot(month: &str, rows: &[(&str, &str, f64)]) -> Snapshot {
    let securities: BTreeMap<String, SecurityRecord> = rows
        .iter()
        .map(|(isin, name, value)| (isin.to_string(), security(name, *value)))
        .collect();
    Snapshot::new(month.parse().expect("valid month key"), securities)
}

/// Build a snapshot holding a single security `INE001`
#[allow(dead_code)]
pub fn single(month: &str, market_value: f64) -> Snapshot {
    snapshot(month, &[("INE001", "Alpha Bank", market_value)])
}

/// Collect snapshots into an in-memory source
#[allow(dead_code)]
pub fn snapshot_set(snapshots: Vec<Snapshot>) -> SnapshotSet {
    snapshots.into_iter().collect()
}

#[allow(dead_code)]
pub fn skip_options() -> RangeOptions {
    RangeOptions::new(PairFailurePolicy::SkipFailedPair)
}

#[allow(dead_code)]
pub fn fail_options() -> RangeOptions {
    RangeOptions::new(PairFailurePolicy::FailRange)
}

#[allow(dead_code)]
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_704_067_200, 0).expect("valid timestamp")
}
