//! Core types shared across PortDelta crates
//!
//! This crate provides foundational types used by the comparison core,
//! the snapshot store and the logging facility:
//!
//! - **Month keys**: `MonthKey`, the parsed `"<MonthName> <Year>"` identifier
//! - **Schema constants**: Canonical field keys and event names

pub mod month;
pub mod schema;

pub use month::{MonthKey, MonthKeyParseError};
