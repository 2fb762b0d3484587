//! Snapshot validation rules.
//!
//! Comparisons only run over snapshots whose metrics are usable numbers.

pub mod validation;

pub use validation::validate_snapshot;
