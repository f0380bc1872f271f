//! # internhub-storage
//!
//! Local-storage backends for InternHub. A store models one browser
//! profile's local storage: a flat string-to-string map whose writes are
//! single synchronous operations.

pub mod factory;
pub mod providers;

pub use factory::open_store;
