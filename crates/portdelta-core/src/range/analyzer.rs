use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::compare::engine::compare_at;
use crate::errors::{PortDeltaError, Result};
use crate::model::{ChangeSummary, ComparisonResult, RangeResult, SkippedPair};
use crate::source::{sorted_month_keys, SnapshotSource};

use super::policy::{PairFailurePolicy, RangeOptions};

/// Chain pairwise comparisons over every month from `start_month` to
/// `end_month` inclusive
///
/// Month keys are ordered by calendar month, not lexically. Every pairwise
/// result shares the range's `analysis_timestamp`, and `summary` is the
/// field-wise sum over `monthly_changes`.
///
/// # Errors
///
/// - `InvalidInput`: a known key is not a valid month key, or either bound
///   is not known to the source
/// - `Ordering`: `start_month` is not strictly before `end_month`
/// - any pairwise error, when `options.pair_failure` is
///   [`PairFailurePolicy::FailRange`]
pub fn compare_range<S: SnapshotSource + Sync + ?Sized>(
    source: &S,
    start_month: &str,
    end_month: &str,
    options: &RangeOptions,
) -> Result<RangeResult> {
    let keys = sorted_month_keys(source)?;
    let position = |month_key: &str| {
        keys.iter()
            .position(|(_, raw)| raw == month_key)
            .ok_or_else(|| PortDeltaError::UnknownMonth {
                month_key: month_key.to_string(),
            })
    };
    let start_pos = position(start_month)?;
    let end_pos = position(end_month)?;

    if start_pos >= end_pos {
        return Err(PortDeltaError::MonthOrder {
            start_month: start_month.to_string(),
            end_month: end_month.to_string(),
        }
        .into());
    }

    let pairs: Vec<(&str, &str)> = keys[start_pos..=end_pos]
        .windows(2)
        .map(|w| (w[0].1.as_str(), w[1].1.as_str()))
        .collect();

    let analysis_timestamp = Utc::now();
    let outcomes = compare_pairs(source, &pairs, analysis_timestamp, options.parallel);

    let mut monthly_changes = Vec::with_capacity(pairs.len());
    let mut skipped_pairs = Vec::new();
    let mut summary = ChangeSummary::default();

    for ((pair_start, pair_end), outcome) in pairs.iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                summary.accumulate(&result.summary);
                monthly_changes.push(result);
            }
            Err(err) => match options.pair_failure {
                PairFailurePolicy::FailRange => return Err(err),
                PairFailurePolicy::SkipFailedPair => {
                    tracing::warn!(
                        start_month = %pair_start,
                        end_month = %pair_end,
                        err.code = err.code(),
                        "skipping month pair: {}",
                        err
                    );
                    skipped_pairs.push(SkippedPair {
                        start_month: pair_start.to_string(),
                        end_month: pair_end.to_string(),
                        error_code: err.code().to_string(),
                        message: err.to_string(),
                    });
                }
            },
        }
    }

    tracing::debug!(
        start_month,
        end_month,
        pair_count = pairs.len(),
        skipped = skipped_pairs.len(),
        "range analysed"
    );

    Ok(RangeResult {
        start_month: start_month.to_string(),
        end_month: end_month.to_string(),
        analysis_timestamp,
        monthly_changes,
        summary,
        skipped_pairs,
    })
}

fn compare_pairs<S: SnapshotSource + Sync + ?Sized>(
    source: &S,
    pairs: &[(&str, &str)],
    analysis_timestamp: DateTime<Utc>,
    parallel: bool,
) -> Vec<Result<ComparisonResult>> {
    if parallel {
        pairs
            .par_iter()
            .map(|(start, end)| compare_at(source, start, end, analysis_timestamp))
            .collect()
    } else {
        pairs
            .iter()
            .map(|(start, end)| compare_at(source, start, end, analysis_timestamp))
            .collect()
    }
}
