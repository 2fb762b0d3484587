//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Snapshot identifiers
pub const FIELD_MONTH_KEY: &str = "month_key";
pub const FIELD_START_MONTH: &str = "start_month";
pub const FIELD_END_MONTH: &str = "end_month";
pub const FIELD_ISIN: &str = "isin";

// Collection sizes
pub const FIELD_SECURITY_COUNT: &str = "security_count";
pub const FIELD_PAIR_COUNT: &str = "pair_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
