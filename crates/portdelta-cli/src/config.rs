//! Global CLI settings
//!
//! Each flag falls back to an environment variable, then to a default.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use portdelta_core::logging_facility::Profile;
use portdelta_store::JsonSnapshotStore;

/// Default directory holding one JSON snapshot per month
pub const DEFAULT_DATA_DIR: &str = "data/portfolio_data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogProfile {
    Development,
    Production,
}

impl From<LogProfile> for Profile {
    fn from(profile: LogProfile) -> Self {
        match profile {
            LogProfile::Development => Profile::Development,
            LogProfile::Production => Profile::Production,
        }
    }
}

#[derive(Debug, Args)]
pub struct Settings {
    /// Directory of per-month snapshot files
    #[arg(
        long,
        global = true,
        env = "PORTDELTA_DATA_DIR",
        default_value = DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = "PORTDELTA_LOG_PROFILE",
        value_enum,
        default_value_t = LogProfile::Development
    )]
    pub log_profile: LogProfile,
}

impl Settings {
    /// Open the snapshot store, reporting files that failed to load
    pub fn open_store(&self) -> Result<JsonSnapshotStore, Box<dyn std::error::Error>> {
        let store = JsonSnapshotStore::open(&self.data_dir)?;
        for failure in store.load_failures() {
            eprintln!("Warning: skipped {}: {}", failure.path.display(), failure.error);
        }
        Ok(store)
    }
}
