pub(crate) mod float_repr;

pub mod change;
pub mod result;
pub mod security;
pub mod snapshot;

pub use change::{
    ChangeType, HeldChange, SecurityChange, SecurityChangeRecord, EXIT_PERCENTAGE,
    NEW_ENTRY_PERCENTAGE,
};
pub use result::{ChangeEntry, ChangeSummary, ComparisonResult, RangeResult, SkippedPair};
pub use security::{SecurityMetrics, SecurityRecord};
pub use snapshot::{Snapshot, SnapshotMetadata};
