//! Range analysis: chained comparisons over consecutive months.
//!
//! [`compare_range`] orders every month key known to a source
//! chronologically, slices the inclusive window between two keys and
//! compares each adjacent pair. What happens when one pair fails is decided
//! by the caller through [`PairFailurePolicy`].

pub mod analyzer;
pub mod policy;

pub use analyzer::compare_range;
pub use policy::{PairFailurePolicy, RangeOptions};
