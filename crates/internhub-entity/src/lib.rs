//! # internhub-entity
//!
//! Domain entity models for InternHub: the closed role set, credential
//! accounts, the persisted session projection, and internship listings.

pub mod account;
pub mod internship;
pub mod session;
