//! # internhub
//!
//! Session and credential authority for the InternHub internship portal.
//!
//! [`Portal`] wires the workspace crates together:
//!
//! - `internhub-core` — configuration, errors, and the local-storage trait
//! - `internhub-entity` — roles, accounts, sessions, and internships
//! - `internhub-storage` — in-memory and file-backed local storage
//! - `internhub-auth` — credential directory, authentication, and role gating
//! - `internhub-service` — internship catalog and posting

pub mod portal;

pub use portal::{Portal, RegistrationOutcome};

pub use internhub_auth::{AuthFailure, AuthState, GateDecision, Navigation, RedirectTarget};
pub use internhub_core::config::AppConfig;
pub use internhub_core::error::{AppError, ErrorKind};
pub use internhub_entity::account::Role;
pub use internhub_entity::session::Session;
pub use internhub_service::{InternshipDraft, InternshipFilter};
