//! Per-security change classification.
//!
//! `SecurityChange` is a closed sum type: a new entry carries only the end
//! metrics, an exit only the start metrics, and a held position both. The
//! flat wire layout (`change_type`, `old_metrics`, `new_metrics`,
//! `percentage_change`, `value_change`) is produced and validated through
//! `SecurityChangeRecord`.

use serde::{Deserialize, Serialize};

use super::float_repr;
use super::security::SecurityMetrics;

/// Percentage change reported for a security that entered the portfolio
pub const NEW_ENTRY_PERCENTAGE: f64 = 100.0;

/// Percentage change reported for a security that left the portfolio
pub const EXIT_PERCENTAGE: f64 = -100.0;

/// Classification tag of a security's change between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    NewEntry,
    Exit,
    Increased,
    Decreased,
    NoChange,
}

impl ChangeType {
    /// All tags, in report order
    pub const ALL: [ChangeType; 5] = [
        ChangeType::NewEntry,
        ChangeType::Exit,
        ChangeType::Increased,
        ChangeType::Decreased,
        ChangeType::NoChange,
    ];

    /// Stable wire name, e.g. `NEW_ENTRY`
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::NewEntry => "NEW_ENTRY",
            ChangeType::Exit => "EXIT",
            ChangeType::Increased => "INCREASED",
            ChangeType::Decreased => "DECREASED",
            ChangeType::NoChange => "NO_CHANGE",
        }
    }

    /// Plural display label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::NewEntry => "New Entries",
            ChangeType::Exit => "Exits",
            ChangeType::Increased => "Increased Positions",
            ChangeType::Decreased => "Decreased Positions",
            ChangeType::NoChange => "Unchanged Positions",
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change of a security present in both snapshots
#[derive(Debug, Clone, PartialEq)]
pub struct HeldChange {
    pub old_metrics: SecurityMetrics,
    pub new_metrics: SecurityMetrics,
    /// `value_change / old market value * 100`; infinite against a zero base
    pub percentage_change: f64,
    pub value_change: f64,
}

/// Classified change of one security between two snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SecurityChangeRecord", try_from = "SecurityChangeRecord")]
pub enum SecurityChange {
    NewEntry { new_metrics: SecurityMetrics },
    Exit { old_metrics: SecurityMetrics },
    Increased(HeldChange),
    Decreased(HeldChange),
    NoChange(HeldChange),
}

impl SecurityChange {
    pub fn change_type(&self) -> ChangeType {
        match self {
            SecurityChange::NewEntry { .. } => ChangeType::NewEntry,
            SecurityChange::Exit { .. } => ChangeType::Exit,
            SecurityChange::Increased(_) => ChangeType::Increased,
            SecurityChange::Decreased(_) => ChangeType::Decreased,
            SecurityChange::NoChange(_) => ChangeType::NoChange,
        }
    }

    /// Start-side metrics; absent only for new entries
    pub fn old_metrics(&self) -> Option<&SecurityMetrics> {
        match self {
            SecurityChange::NewEntry { .. } => None,
            SecurityChange::Exit { old_metrics } => Some(old_metrics),
            SecurityChange::Increased(held)
            | SecurityChange::Decreased(held)
            | SecurityChange::NoChange(held) => Some(&held.old_metrics),
        }
    }

    /// End-side metrics; absent only for exits
    pub fn new_metrics(&self) -> Option<&SecurityMetrics> {
        match self {
            SecurityChange::NewEntry { new_metrics } => Some(new_metrics),
            SecurityChange::Exit { .. } => None,
            SecurityChange::Increased(held)
            | SecurityChange::Decreased(held)
            | SecurityChange::NoChange(held) => Some(&held.new_metrics),
        }
    }

    pub fn held(&self) -> Option<&HeldChange> {
        match self {
            SecurityChange::Increased(held)
            | SecurityChange::Decreased(held)
            | SecurityChange::NoChange(held) => Some(held),
            _ => None,
        }
    }

    /// Percentage change; fixed at +100 / -100 for entries and exits
    pub fn percentage_change(&self) -> f64 {
        match self {
            SecurityChange::NewEntry { .. } => NEW_ENTRY_PERCENTAGE,
            SecurityChange::Exit { .. } => EXIT_PERCENTAGE,
            SecurityChange::Increased(held)
            | SecurityChange::Decreased(held)
            | SecurityChange::NoChange(held) => held.percentage_change,
        }
    }

    /// Market value delta (end minus start, a missing side counting as zero)
    pub fn value_change(&self) -> f64 {
        match self {
            SecurityChange::NewEntry { new_metrics } => new_metrics.market_value,
            SecurityChange::Exit { old_metrics } => -old_metrics.market_value,
            SecurityChange::Increased(held)
            | SecurityChange::Decreased(held)
            | SecurityChange::NoChange(held) => held.value_change,
        }
    }
}

/// Flat wire form of `SecurityChange`
///
/// Converting back into `SecurityChange` rejects records whose metric
/// presence contradicts their `change_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityChangeRecord {
    pub change_type: ChangeType,
    pub old_metrics: Option<SecurityMetrics>,
    pub new_metrics: Option<SecurityMetrics>,
    #[serde(with = "float_repr")]
    pub percentage_change: f64,
    pub value_change: f64,
}

impl From<SecurityChange> for SecurityChangeRecord {
    fn from(change: SecurityChange) -> Self {
        let change_type = change.change_type();
        let percentage_change = change.percentage_change();
        let value_change = change.value_change();
        let (old_metrics, new_metrics) = match change {
            SecurityChange::NewEntry { new_metrics } => (None, Some(new_metrics)),
            SecurityChange::Exit { old_metrics } => (Some(old_metrics), None),
            SecurityChange::Increased(held)
            | SecurityChange::Decreased(held)
            | SecurityChange::NoChange(held) => (Some(held.old_metrics), Some(held.new_metrics)),
        };
        Self {
            change_type,
            old_metrics,
            new_metrics,
            percentage_change,
            value_change,
        }
    }
}

impl TryFrom<SecurityChangeRecord> for SecurityChange {
    type Error = String;

    fn try_from(record: SecurityChangeRecord) -> Result<Self, Self::Error> {
        let kind = record.change_type;
        match (kind, record.old_metrics, record.new_metrics) {
            (ChangeType::NewEntry, None, Some(new_metrics)) => {
                Ok(SecurityChange::NewEntry { new_metrics })
            }
            (ChangeType::Exit, Some(old_metrics), None) => Ok(SecurityChange::Exit { old_metrics }),
            (
                ChangeType::Increased | ChangeType::Decreased | ChangeType::NoChange,
                Some(old_metrics),
                Some(new_metrics),
            ) => {
                let held = HeldChange {
                    old_metrics,
                    new_metrics,
                    percentage_change: record.percentage_change,
                    value_change: record.value_change,
                };
                Ok(match kind {
                    ChangeType::Increased => SecurityChange::Increased(held),
                    ChangeType::Decreased => SecurityChange::Decreased(held),
                    _ => SecurityChange::NoChange(held),
                })
            }
            (kind, old, new) => Err(format!(
                "{} change cannot have old_metrics {} and new_metrics {}",
                kind,
                if old.is_some() { "present" } else { "absent" },
                if new.is_some() { "present" } else { "absent" },
            )),
        }
    }
}
