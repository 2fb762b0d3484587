//! Engine-level action commands for I/O operations.

use std::path::PathBuf;

use portdelta_core::errors::Result;
use portdelta_core::{log_op_end, log_op_error, log_op_start};
use portdelta_core_types::MonthKey;
use portdelta_store::{import_holdings_csv, month_key_from_file_name, CsvImportOptions};
use portdelta_store::JsonSnapshotStore;

/// Engine-level commands that write to the snapshot store.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Import one holdings export and persist it as a snapshot.
    ImportHoldings {
        path: PathBuf,
        /// Month to record the snapshot under; None derives it from the file name.
        month_key: Option<MonthKey>,
        options: CsvImportOptions,
    },
}

/// Outcome of a successful holdings import.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult {
    pub month_key: String,
    pub saved_path: PathBuf,
    pub security_count: usize,
    pub total_value: f64,
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    Imported(ImportResult),
}

/// Apply an engine command against the snapshot store.
///
/// # Errors
///
/// - `InvalidInput`: the file is missing, not CSV, carries unparseable
///   numbers, or its name does not end in a month key
/// - `Io` / `Serialization`: the snapshot could not be written
pub fn apply_engine_command(
    cmd: EngineCommand,
    store: &mut JsonSnapshotStore,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::ImportHoldings {
            path,
            month_key,
            options,
        } => {
            log_op_start!("import_holdings", path = %path.display());
            let start = std::time::Instant::now();

            let result = (|| -> Result<EngineCommandResult> {
                let month_key = match month_key {
                    Some(key) => key,
                    None => month_key_from_file_name(&path)?,
                };
                let snapshot = import_holdings_csv(&path, &month_key, &options)?;
                let security_count = snapshot.len();
                let total_value = snapshot.total_value();
                let saved_path = store.save(snapshot)?;

                Ok(EngineCommandResult::Imported(ImportResult {
                    month_key: month_key.to_string(),
                    saved_path,
                    security_count,
                    total_value,
                }))
            })();

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(_) => log_op_end!("import_holdings", duration_ms = elapsed),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("import_holdings", e_clone, duration_ms = elapsed);
                }
            }
            result
        }
    }
}
