//! Core type definitions used across the InternHub workspace.

pub mod id;

pub use id::*;
