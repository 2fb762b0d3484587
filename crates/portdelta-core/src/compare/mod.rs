//! Snapshot comparison engine.
//!
//! Compares two holdings snapshots and classifies every security in the
//! union of their ISINs as a new entry, exit, increase, decrease or
//! unchanged position.
//!
//! ## Entry point
//!
//! ```ignore
//! use portdelta_core::compare::compare;
//!
//! let result = compare(&snapshots, "January 2024", "February 2024")?;
//! let text = portdelta_core::report::render_comparison_summary(&result);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: securities are visited in ISIN order; identical inputs
//!   produce identical results apart from `analysis_timestamp`.
//! - **Completeness**: exactly one change per ISIN in either snapshot, and
//!   the summary counters sum to that number.
//! - **Read-only**: snapshots are borrowed, never modified.

pub mod engine;

pub use engine::{
    classify_change, compare, compare_snapshots, percentage_change, NO_CHANGE_THRESHOLD_PCT,
};
