//! PortDelta Core - holdings snapshot comparison kernel
//!
//! This crate provides the data model and pure computations for comparing
//! monthly portfolio holdings snapshots:
//! - Snapshot, security and change models with a stable serde contract
//! - Pairwise comparison and classification of every security
//! - Range analysis chaining comparisons over consecutive months
//! - Snapshot validation ahead of any computation
//! - Text reports and chart series derived from results
//!
//! Storage, import and presentation live in the collaborator crates.

pub mod compare;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod range;
pub mod report;
pub mod rules;
pub mod source;

#[doc(hidden)]
pub use portdelta_core_types as core_types;

// Re-export commonly used types
pub use compare::{compare, compare_snapshots};
pub use errors::{ExError, ExErrorKind, PortDeltaError, Result};
pub use model::{
    ChangeSummary, ChangeType, ComparisonResult, RangeResult, SecurityChange, SecurityMetrics,
    SecurityRecord, Snapshot,
};
pub use range::{compare_range, PairFailurePolicy, RangeOptions};
pub use source::{SnapshotSet, SnapshotSource};
