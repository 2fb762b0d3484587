use portdelta_core_types::{MonthKey, MonthKeyParseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::security::SecurityRecord;

/// Header of a holdings snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Month key, e.g. `"March 2024"`
    pub date: String,
    pub total_securities: usize,
    /// Reported portfolio value; normally the sum of market values
    pub total_value: f64,
    /// When the snapshot was ingested (ISO-8601, informational only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<String>,
}

/// The complete set of holdings for one reporting month
///
/// Created once by ingestion and never mutated afterwards; the comparison
/// core only ever borrows snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    metadata: SnapshotMetadata,
    securities: BTreeMap<String, SecurityRecord>,
}

impl Snapshot {
    /// Build a snapshot whose total value is the sum of its market values
    pub fn new(date: MonthKey, securities: BTreeMap<String, SecurityRecord>) -> Self {
        let total_value = securities.values().map(SecurityRecord::market_value).sum();
        Self::with_total_value(date, total_value, securities)
    }

    /// Build a snapshot with an explicitly reported total value
    ///
    /// The reported total may legitimately differ from the sum of the
    /// detail rows (rounding, cash lines absent from the detail).
    pub fn with_total_value(
        date: MonthKey,
        total_value: f64,
        securities: BTreeMap<String, SecurityRecord>,
    ) -> Self {
        Self {
            metadata: SnapshotMetadata {
                date: date.to_string(),
                total_securities: securities.len(),
                total_value,
                processing_date: None,
            },
            securities,
        }
    }

    /// Override the reported security count
    ///
    /// Imports count every holding row, so a repeated ISIN is counted
    /// again even though only one record is kept for it.
    pub fn with_total_securities(mut self, total_securities: usize) -> Self {
        self.metadata.total_securities = total_securities;
        self
    }

    /// Stamp the ingestion time
    pub fn with_processing_date(mut self, processing_date: impl Into<String>) -> Self {
        self.metadata.processing_date = Some(processing_date.into());
        self
    }

    pub fn metadata(&self) -> &SnapshotMetadata {
        &self.metadata
    }

    /// The month key string this snapshot was recorded under
    pub fn date(&self) -> &str {
        &self.metadata.date
    }

    /// Parse the recorded month key
    ///
    /// # Errors
    ///
    /// Returns `MonthKeyParseError` if the stored date is not a month key.
    pub fn month_key(&self) -> Result<MonthKey, MonthKeyParseError> {
        MonthKey::parse(&self.metadata.date)
    }

    pub fn total_value(&self) -> f64 {
        self.metadata.total_value
    }

    pub fn securities(&self) -> &BTreeMap<String, SecurityRecord> {
        &self.securities
    }

    pub fn get(&self, isin: &str) -> Option<&SecurityRecord> {
        self.securities.get(isin)
    }

    pub fn len(&self) -> usize {
        self.securities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.securities.is_empty()
    }
}
