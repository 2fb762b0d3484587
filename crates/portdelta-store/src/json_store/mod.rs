//! Directory-backed snapshot store
//!
//! One pretty-printed JSON file per month, named `<month key>.json`.

pub mod atomic;
pub mod fs_store;

pub use atomic::atomic_write;
pub use fs_store::{JsonSnapshotStore, LoadFailure};
