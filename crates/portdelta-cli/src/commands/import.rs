//! Import holdings CSV exports

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use portdelta_core_types::MonthKey;
use portdelta_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use portdelta_store::CsvImportOptions;

use super::CommandResult;
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV files, or directories whose .csv files are imported in name order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Month to record the snapshot under (single file only)
    #[arg(long)]
    pub month: Option<MonthKey>,

    /// Preamble rows before the header row
    #[arg(long, default_value_t = 7)]
    pub skip_rows: usize,

    /// Zero-based column index of the security name
    #[arg(long, default_value_t = 2)]
    pub first_column: usize,
}

pub fn execute(settings: &Settings, args: ImportArgs) -> CommandResult {
    let files = collect_csv_files(&args.paths)?;
    if files.is_empty() {
        return Err("no .csv files found".into());
    }
    if args.month.is_some() && files.len() > 1 {
        return Err("--month can only be used with a single file".into());
    }

    let options = CsvImportOptions {
        skip_rows: args.skip_rows,
        first_column: args.first_column,
    };
    let mut store = settings.open_store()?;

    for path in files {
        let command = EngineCommand::ImportHoldings {
            path,
            month_key: args.month,
            options,
        };
        match apply_engine_command(command, &mut store)? {
            EngineCommandResult::Imported(imported) => {
                println!(
                    "Imported {} ({} securities, total value {:.2}) -> {}",
                    imported.month_key,
                    imported.security_count,
                    imported.total_value,
                    imported.saved_path.display()
                );
            }
        }
    }

    Ok(())
}

fn collect_csv_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && is_csv(p))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
