//! Core traits defined in `internhub-core` and implemented by other crates.

pub mod storage;

pub use storage::{KeyValueStore, KeyValueStoreExt};
