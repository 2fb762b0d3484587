//! Crash-safe snapshot file writes
//!
//! A snapshot is written to `<month>.json.tmp` beside its target, flushed
//! to disk, then renamed over `<month>.json`. The store only loads `*.json`,
//! so a leftover temp file is never mistaken for a snapshot.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{io_error, Result};

/// Temp file used while replacing `target_path`
pub fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Replace `target_path` with `content` in a single rename
///
/// Readers see either the previous snapshot or the new one, never a
/// partial file. The temp file is removed if the write or rename fails.
///
/// # Errors
///
/// Returns `Io` if the directory, temp file or rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_snapshot_dir", e))?;
    }

    let temp_path = temp_path_for(target_path);
    let written = write_synced(&temp_path, content)
        .map_err(|e| io_error("write_snapshot_temp", e))
        .and_then(|()| {
            fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_snapshot_temp", e))
        });

    if written.is_err() {
        // Best effort
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
