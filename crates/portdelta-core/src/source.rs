use std::collections::BTreeMap;

use portdelta_core_types::MonthKey;

use crate::errors::{PortDeltaError, Result};
use crate::model::Snapshot;

/// Read-only access to snapshots keyed by month key
///
/// The comparison core only reads through this trait; implementations must
/// not mutate a snapshot while a comparison borrows it.
pub trait SnapshotSource {
    /// Look up the snapshot recorded under `month_key`
    fn get(&self, month_key: &str) -> Option<&Snapshot>;

    /// All month keys known to the source, in no particular order
    fn list_keys(&self) -> Vec<String>;
}

impl SnapshotSource for BTreeMap<String, Snapshot> {
    fn get(&self, month_key: &str) -> Option<&Snapshot> {
        BTreeMap::get(self, month_key)
    }

    fn list_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for &S {
    fn get(&self, month_key: &str) -> Option<&Snapshot> {
        (**self).get(month_key)
    }

    fn list_keys(&self) -> Vec<String> {
        (**self).list_keys()
    }
}

/// Resolve a month key or fail with `UnknownMonth`
///
/// # Errors
///
/// Returns `InvalidInput` if the key is not known to the source.
pub fn resolve<'a, S: SnapshotSource + ?Sized>(source: &'a S, month_key: &str) -> Result<&'a Snapshot> {
    source.get(month_key).ok_or_else(|| {
        PortDeltaError::UnknownMonth {
            month_key: month_key.to_string(),
        }
        .into()
    })
}

/// Known keys split into month keys and keys that are not month keys
///
/// Month keys come back parsed and sorted chronologically; the rest are
/// sorted as strings.
pub fn partition_month_keys<S: SnapshotSource + ?Sized>(
    source: &S,
) -> (Vec<(MonthKey, String)>, Vec<String>) {
    let mut months = Vec::new();
    let mut others = Vec::new();
    for raw in source.list_keys() {
        match MonthKey::parse(&raw) {
            Ok(parsed) => months.push((parsed, raw)),
            Err(_) => others.push(raw),
        }
    }
    months.sort();
    others.sort();
    (months, others)
}

/// Known month keys parsed and sorted chronologically
///
/// # Errors
///
/// Returns `InvalidInput` naming the first (in string order) key that is
/// not a valid `"<MonthName> <Year>"` string.
pub fn sorted_month_keys<S: SnapshotSource + ?Sized>(source: &S) -> Result<Vec<(MonthKey, String)>> {
    let (months, others) = partition_month_keys(source);
    match others.into_iter().next() {
        Some(month_key) => Err(PortDeltaError::InvalidMonthKey { month_key }.into()),
        None => Ok(months),
    }
}

/// In-memory snapshot collection
///
/// Snapshots are keyed by the month key recorded in their metadata.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSet {
    snapshots: BTreeMap<String, Snapshot>,
}

impl SnapshotSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snapshot, replacing any earlier one for the same month
    ///
    /// Returns the replaced snapshot, if any.
    pub fn insert(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        self.snapshots.insert(snapshot.date().to_string(), snapshot)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Snapshot)> {
        self.snapshots.iter()
    }
}

impl FromIterator<Snapshot> for SnapshotSet {
    fn from_iter<I: IntoIterator<Item = Snapshot>>(iter: I) -> Self {
        let mut set = Self::new();
        for snapshot in iter {
            set.insert(snapshot);
        }
        set
    }
}

impl SnapshotSource for SnapshotSet {
    fn get(&self, month_key: &str) -> Option<&Snapshot> {
        self.snapshots.get(month_key)
    }

    fn list_keys(&self) -> Vec<String> {
        self.snapshots.keys().cloned().collect()
    }
}
