//! PortDelta Store - snapshot persistence and holdings import
//!
//! Provides:
//! - A directory of JSON snapshot files, one per month, readable as a
//!   `SnapshotSource`
//! - Atomic temp-file + rename writes
//! - CSV import of monthly portfolio holdings exports

pub mod errors;
pub mod import;
pub mod json_store;

// Re-export key types
pub use errors::Result;
pub use import::{import_holdings_csv, month_key_from_file_name, CsvImportOptions};
pub use json_store::{JsonSnapshotStore, LoadFailure};
