use serde::{Deserialize, Serialize};

/// What a range analysis does when one month pair cannot be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairFailurePolicy {
    /// Drop the pair from the results and aggregate, record it in
    /// `skipped_pairs`, and continue with the next pair
    SkipFailedPair,
    /// Fail the whole range with the first pairwise error
    FailRange,
}

/// Options for [`compare_range`](super::compare_range)
///
/// There is deliberately no `Default`: callers choose a failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOptions {
    pub pair_failure: PairFailurePolicy,
    /// Run pairwise comparisons on the rayon pool. Result order is
    /// chronological either way.
    pub parallel: bool,
}

impl RangeOptions {
    pub fn new(pair_failure: PairFailurePolicy) -> Self {
        Self {
            pair_failure,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
