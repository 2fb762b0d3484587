//! Filesystem-based JSON snapshot store
//!
//! Loads every `*.json` file of a directory at open time and persists new
//! snapshots with atomic writes. The file stem is the month key a snapshot
//! is known under.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use portdelta_core::errors::ExError;
use portdelta_core::model::Snapshot;
use portdelta_core::source::SnapshotSource;
use portdelta_core_types::MonthKey;

use crate::errors::{invalid_month_key, io_error, serde_error, Result};
use crate::json_store::atomic::atomic_write;

/// A snapshot file that could not be loaded
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: ExError,
}

/// Directory of per-month JSON snapshots
#[derive(Debug)]
pub struct JsonSnapshotStore {
    root: PathBuf,
    snapshots: BTreeMap<String, Snapshot>,
    load_failures: Vec<LoadFailure>,
}

impl JsonSnapshotStore {
    /// Open the store at `root`, creating the directory if needed
    ///
    /// Files that cannot be read or parsed are skipped and reported through
    /// [`load_failures`](Self::load_failures).
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory cannot be created or listed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| io_error("create_data_dir", e))?;

        let mut paths: Vec<PathBuf> = fs::read_dir(&root)
            .map_err(|e| io_error("list_data_dir", e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut snapshots = BTreeMap::new();
        let mut load_failures = Vec::new();

        for path in paths {
            let Some(month_key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match read_snapshot(&path) {
                Ok(snapshot) => {
                    snapshots.insert(month_key.to_string(), snapshot);
                }
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        err.code = error.code(),
                        "skipping unreadable snapshot file: {}",
                        error
                    );
                    load_failures.push(LoadFailure { path, error });
                }
            }
        }

        tracing::debug!(
            root = %root.display(),
            snapshot_count = snapshots.len(),
            failures = load_failures.len(),
            "snapshot store opened"
        );

        Ok(Self {
            root,
            snapshots,
            load_failures,
        })
    }

    /// Persist a snapshot as `<date>.json` and make it available for reads
    ///
    /// An existing snapshot for the same month is replaced.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: the snapshot's date is not a month key
    /// - `Serialization` / `Io`: the file could not be written
    pub fn save(&mut self, snapshot: Snapshot) -> Result<PathBuf> {
        let month_key = snapshot.date().to_string();
        if MonthKey::parse(&month_key).is_err() {
            return Err(invalid_month_key("save_snapshot", &month_key));
        }

        let path = self.path_for(&month_key);
        let json =
            serde_json::to_string_pretty(&snapshot).map_err(|e| serde_error("save_snapshot", e))?;
        atomic_write(&path, json.as_bytes())?;

        tracing::info!(
            month_key = %month_key,
            security_count = snapshot.len(),
            "snapshot saved"
        );
        self.snapshots.insert(month_key, snapshot);
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path a month's snapshot is stored at
    pub fn path_for(&self, month_key: &str) -> PathBuf {
        self.root.join(format!("{month_key}.json"))
    }

    /// Files skipped while opening the store
    pub fn load_failures(&self) -> &[LoadFailure] {
        &self.load_failures
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotSource for JsonSnapshotStore {
    fn get(&self, month_key: &str) -> Option<&Snapshot> {
        self.snapshots.get(month_key)
    }

    fn list_keys(&self) -> Vec<String> {
        self.snapshots.keys().cloned().collect()
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_snapshot", e))?;
    serde_json::from_str(&content).map_err(|e| serde_error("parse_snapshot", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portdelta_core::model::SecurityRecord;
    use tempfile::TempDir;

    fn snapshot(month: &str) -> Snapshot {
        let mut securities = BTreeMap::new();
        securities.insert(
            "INE001".to_string(),
            SecurityRecord::new("Alpha", "Banks", 1.0, 10.0, 0.5),
        );
        Snapshot::new(month.parse().unwrap(), securities)
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("portfolio_data");

        let store = JsonSnapshotStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonSnapshotStore::open(temp_dir.path()).unwrap();

        let path = store.save(snapshot("March 2024")).unwrap();
        assert_eq!(path, temp_dir.path().join("March 2024.json"));
        assert!(store.get("March 2024").is_some());

        let reopened = JsonSnapshotStore::open(temp_dir.path()).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get("March 2024"), store.get("March 2024"));
    }

    #[test]
    fn test_save_rejects_non_month_date() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonSnapshotStore::open(temp_dir.path()).unwrap();
        let bad: Snapshot = serde_json::from_str(
            r#"{"metadata": {"date": "../escape", "total_securities": 0, "total_value": 0.0},
                "securities": {}}"#,
        )
        .unwrap();

        let err = store.save(bad).unwrap_err();

        assert_eq!(err.code(), "ERR_INVALID_INPUT");
        assert!(store.is_empty());
    }
}
