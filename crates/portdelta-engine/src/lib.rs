//! PortDelta Engine - Orchestration layer
//!
//! Provides high-level queries and commands that coordinate between the
//! comparison core, report rendering and the snapshot store.

pub mod commands;

pub use commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult, ImportResult,
};
pub use commands::engine_query::{
    apply_engine_query, ComparisonReport, EngineQuery, EngineQueryResult, RangeReport,
};
