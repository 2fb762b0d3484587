//! Command orchestration layer.
//!
//! Provides the query and command entry points that coordinate between
//! the comparison core and the snapshot store.

pub mod engine_command;
pub mod engine_query;
