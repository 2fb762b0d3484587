//! Holdings import from monthly portfolio CSV exports.
//!
//! The export is a spreadsheet saved as CSV: a preamble of title rows, a
//! header row, then one row per holding. Six consecutive columns carry
//! Name, ISIN, Industry, Quantity, Market Value and NAV (as a fraction of
//! net assets).

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use csv::{ReaderBuilder, StringRecord};
use portdelta_core::model::{SecurityRecord, Snapshot};
use portdelta_core_types::MonthKey;

use crate::errors::{csv_error, import_error, Result};

/// Layout of the holdings sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvImportOptions {
    /// Preamble rows before the header row
    pub skip_rows: usize,
    /// Zero-based index of the Name column; the other five follow it
    pub first_column: usize,
}

impl Default for CsvImportOptions {
    fn default() -> Self {
        Self {
            skip_rows: 7,
            first_column: 2,
        }
    }
}

/// Derive the month key from an export file name
///
/// The last two whitespace-separated tokens of the file stem name the month,
/// e.g. `"ZN250 - Monthly Portfolio March 2024.csv"` → `March 2024`.
///
/// # Errors
///
/// Returns `InvalidInput` if the stem does not end in a valid month key.
pub fn month_key_from_file_name(path: &Path) -> Result<MonthKey> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| import_error(path, "file name is not valid UTF-8"))?;

    let tokens: Vec<&str> = stem.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(import_error(
            path,
            "file name does not end in a \"<Month> <Year>\" month key",
        ));
    }
    let candidate = tokens[tokens.len() - 2..].join(" ");

    MonthKey::parse(&candidate).map_err(|e| import_error(path, e))
}

/// Read a holdings export into a snapshot for `month_key`
///
/// Rows with an empty ISIN (subtotals, footers, blank lines) are dropped.
/// A repeated ISIN keeps its last row in `securities`, while the reported
/// `total_securities` and `total_value` still count every holding row.
/// NAV fractions are converted to percentage points.
///
/// # Errors
///
/// - `InvalidInput`: the path does not exist, is not a `.csv` file, or a
///   numeric cell cannot be parsed (the error names the line)
/// - `Io`: the file cannot be read
pub fn import_holdings_csv(
    path: &Path,
    month_key: &MonthKey,
    options: &CsvImportOptions,
) -> Result<Snapshot> {
    if !path.is_file() {
        return Err(import_error(path, "file does not exist"));
    }
    if !path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
    {
        return Err(import_error(path, "expected a .csv file"));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;

    let mut securities = BTreeMap::new();
    let mut row_count = 0;
    let mut total_value = 0.0;

    // Preamble rows, then the header row
    for record in reader.records().skip(options.skip_rows + 1) {
        let record = record.map_err(|e| csv_error(path, e))?;
        if let Some((isin, security)) = parse_row(path, &record, options)? {
            row_count += 1;
            total_value += security.market_value();
            securities.insert(isin, security);
        }
    }

    let snapshot = Snapshot::with_total_value(*month_key, total_value, securities)
        .with_total_securities(row_count)
        .with_processing_date(Utc::now().to_rfc3339());

    tracing::info!(
        path = %path.display(),
        month_key = %month_key,
        security_count = snapshot.len(),
        row_count,
        "holdings imported"
    );

    Ok(snapshot)
}

fn parse_row(
    path: &Path,
    record: &StringRecord,
    options: &CsvImportOptions,
) -> Result<Option<(String, SecurityRecord)>> {
    let cell = |offset: usize| {
        record
            .get(options.first_column + offset)
            .map(str::trim)
            .unwrap_or("")
    };

    let isin = cell(1);
    if isin.is_empty() {
        return Ok(None);
    }

    let line = record.position().map(|p| p.line()).unwrap_or_default();
    let number = |offset: usize, column: &str| -> Result<f64> {
        let raw = cell(offset);
        raw.replace(',', "").parse::<f64>().map_err(|_| {
            import_error(
                path,
                format!("line {line}: invalid {column} {raw:?} for {isin}"),
            )
        })
    };

    let quantity = number(3, "Quantity")?;
    let market_value = number(4, "MarketValue")?;
    let nav_fraction = number(5, "NAV")?;

    let security = SecurityRecord::new(cell(0), cell(2), quantity, market_value, nav_fraction * 100.0);
    Ok(Some((isin.to_string(), security)))
}
