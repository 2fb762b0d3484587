//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for all read-only queries
//! over a snapshot source. Unlike `apply_engine_command`, it only borrows the
//! source and never writes.

use portdelta_core::compare::compare;
use portdelta_core::errors::Result;
use portdelta_core::model::{ComparisonResult, RangeResult};
use portdelta_core::range::{compare_range, RangeOptions};
use portdelta_core::report::{render_comparison_summary, render_range_summary};
use portdelta_core::source::{partition_month_keys, SnapshotSource};
use portdelta_core::{log_op_end, log_op_error, log_op_start};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// The structured + rendered result of a single comparison.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    /// Machine-readable comparison
    pub result: ComparisonResult,
    /// Plain-text report
    pub human_summary: String,
}

/// The structured + rendered result of a range analysis.
#[derive(Debug, Clone)]
pub struct RangeReport {
    pub result: RangeResult,
    pub human_summary: String,
}

// ---------------------------------------------------------------------------
// EngineQuery
// ---------------------------------------------------------------------------

/// Read-only queries supported by the engine.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// Known month keys in chronological order; other stored keys are
    /// skipped with a warning.
    ListMonths,
    /// Compare two months directly.
    Compare { start: String, end: String },
    /// Chain comparisons over every month from `start` to `end`.
    CompareRange {
        start: String,
        end: String,
        options: RangeOptions,
    },
    /// A single comparison when `start == end`, otherwise a range.
    Analyze {
        start: String,
        end: String,
        options: RangeOptions,
    },
}

// ---------------------------------------------------------------------------
// EngineQueryResult
// ---------------------------------------------------------------------------

/// All possible results from `apply_engine_query`.
#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    Months(Vec<String>),
    Comparison(Box<ComparisonReport>),
    Range(Box<RangeReport>),
}

// ---------------------------------------------------------------------------
// apply_engine_query
// ---------------------------------------------------------------------------

/// Execute a read-only query against a snapshot source.
///
/// Every query is bracketed by `start` / `end` (or `end_error`) log events.
///
/// # Errors
///
/// Propagates the core errors of the underlying operation: `InvalidInput`
/// for unknown or malformed month keys, `Ordering` for reversed ranges and
/// `Computation` for malformed snapshots.
pub fn apply_engine_query<S: SnapshotSource + Sync + ?Sized>(
    query: EngineQuery,
    source: &S,
) -> Result<EngineQueryResult> {
    match query {
        // ── ListMonths ────────────────────────────────────────────────────────
        EngineQuery::ListMonths => {
            log_op_start!("list_months");
            let start = std::time::Instant::now();

            let (months, others) = partition_month_keys(source);
            for key in &others {
                tracing::warn!(month_key = %key, "ignoring stored key that is not a month key");
            }
            let result: Result<EngineQueryResult> = Ok(EngineQueryResult::Months(
                months.into_iter().map(|(_, raw)| raw).collect(),
            ));

            finish("list_months", start, &result);
            result
        }

        // ── Compare ───────────────────────────────────────────────────────────
        EngineQuery::Compare { start, end } => {
            log_op_start!("compare", start_month = %start, end_month = %end);
            let timer = std::time::Instant::now();

            let result = comparison_report(source, &start, &end);

            finish("compare", timer, &result);
            result
        }

        // ── CompareRange ──────────────────────────────────────────────────────
        EngineQuery::CompareRange {
            start,
            end,
            options,
        } => {
            log_op_start!("compare_range", start_month = %start, end_month = %end);
            let timer = std::time::Instant::now();

            let result = range_report(source, &start, &end, &options);

            finish("compare_range", timer, &result);
            result
        }

        // ── Analyze ───────────────────────────────────────────────────────────
        EngineQuery::Analyze {
            start,
            end,
            options,
        } => {
            log_op_start!("analyze", start_month = %start, end_month = %end);
            let timer = std::time::Instant::now();

            let result = if start == end {
                comparison_report(source, &start, &end)
            } else {
                range_report(source, &start, &end, &options)
            };

            finish("analyze", timer, &result);
            result
        }
    }
}

fn comparison_report<S: SnapshotSource + ?Sized>(
    source: &S,
    start: &str,
    end: &str,
) -> Result<EngineQueryResult> {
    let result = compare(source, start, end)?;
    let human_summary = render_comparison_summary(&result);
    Ok(EngineQueryResult::Comparison(Box::new(ComparisonReport {
        result,
        human_summary,
    })))
}

fn range_report<S: SnapshotSource + Sync + ?Sized>(
    source: &S,
    start: &str,
    end: &str,
    options: &RangeOptions,
) -> Result<EngineQueryResult> {
    let result = compare_range(source, start, end, options)?;
    let human_summary = render_range_summary(&result);
    Ok(EngineQueryResult::Range(Box::new(RangeReport {
        result,
        human_summary,
    })))
}

fn finish(op: &'static str, start: std::time::Instant, result: &Result<EngineQueryResult>) {
    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
}
