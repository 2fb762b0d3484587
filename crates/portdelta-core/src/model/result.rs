//! Comparison and range result types.
//!
//! Field names here are the stable contract consumed by reports, the CLI
//! `--json` output and any other presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::change::{ChangeType, SecurityChange};

/// Counts per change type plus the snapshot-level value delta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub new_entries: usize,
    pub exits: usize,
    pub increases: usize,
    pub decreases: usize,
    pub no_change: usize,
    pub total_value_change: f64,
}

impl ChangeSummary {
    /// Count one classified security
    pub fn record(&mut self, change_type: ChangeType) {
        match change_type {
            ChangeType::NewEntry => self.new_entries += 1,
            ChangeType::Exit => self.exits += 1,
            ChangeType::Increased => self.increases += 1,
            ChangeType::Decreased => self.decreases += 1,
            ChangeType::NoChange => self.no_change += 1,
        }
    }

    pub fn count(&self, change_type: ChangeType) -> usize {
        match change_type {
            ChangeType::NewEntry => self.new_entries,
            ChangeType::Exit => self.exits,
            ChangeType::Increased => self.increases,
            ChangeType::Decreased => self.decreases,
            ChangeType::NoChange => self.no_change,
        }
    }

    /// Sum of the five counters
    pub fn classified_total(&self) -> usize {
        ChangeType::ALL.iter().map(|t| self.count(*t)).sum()
    }

    /// Add another summary field by field
    pub fn accumulate(&mut self, other: &ChangeSummary) {
        self.new_entries += other.new_entries;
        self.exits += other.exits;
        self.increases += other.increases;
        self.decreases += other.decreases;
        self.no_change += other.no_change;
        self.total_value_change += other.total_value_change;
    }
}

/// A security's display name together with its classified change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub name: String,
    pub change: SecurityChange,
}

/// Outcome of comparing two snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub start_month: String,
    pub end_month: String,
    pub analysis_timestamp: DateTime<Utc>,
    pub summary: ChangeSummary,
    /// Keyed by ISIN; covers the union of both snapshots' securities
    pub changes: BTreeMap<String, ChangeEntry>,
}

impl ComparisonResult {
    /// Entries of one change type, in ISIN order
    pub fn changes_of_type(
        &self,
        change_type: ChangeType,
    ) -> impl Iterator<Item = (&String, &ChangeEntry)> {
        self.changes
            .iter()
            .filter(move |(_, entry)| entry.change.change_type() == change_type)
    }
}

/// A consecutive month pair dropped from a range analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedPair {
    pub start_month: String,
    pub end_month: String,
    /// Stable code of the error that caused the skip
    pub error_code: String,
    pub message: String,
}

/// Outcome of chaining pairwise comparisons over a month range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeResult {
    pub start_month: String,
    pub end_month: String,
    pub analysis_timestamp: DateTime<Utc>,
    /// One result per consecutive month pair, in chronological order
    pub monthly_changes: Vec<ComparisonResult>,
    /// Field-wise sum over `monthly_changes`
    pub summary: ChangeSummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_pairs: Vec<SkippedPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_count() {
        let mut summary = ChangeSummary::default();
        summary.record(ChangeType::NewEntry);
        summary.record(ChangeType::NewEntry);
        summary.record(ChangeType::NoChange);

        assert_eq!(summary.new_entries, 2);
        assert_eq!(summary.count(ChangeType::NoChange), 1);
        assert_eq!(summary.classified_total(), 3);
    }

    #[test]
    fn test_accumulate_is_field_wise() {
        let mut total = ChangeSummary {
            increases: 1,
            total_value_change: 10.5,
            ..ChangeSummary::default()
        };
        total.accumulate(&ChangeSummary {
            exits: 2,
            increases: 3,
            total_value_change: -4.0,
            ..ChangeSummary::default()
        });

        assert_eq!(total.exits, 2);
        assert_eq!(total.increases, 4);
        assert_eq!(total.total_value_change, 6.5);
    }

    #[test]
    fn test_range_result_omits_empty_skipped_pairs() {
        let result = RangeResult {
            start_month: "January 2024".to_string(),
            end_month: "February 2024".to_string(),
            analysis_timestamp: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
            monthly_changes: Vec::new(),
            summary: ChangeSummary::default(),
            skipped_pairs: Vec::new(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("skipped_pairs").is_none());
        assert!(value["monthly_changes"].as_array().unwrap().is_empty());
    }
}
