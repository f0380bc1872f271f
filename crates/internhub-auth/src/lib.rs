//! # internhub-auth
//!
//! Credential authority for the InternHub portal.
//!
//! ## Modules
//!
//! - `directory` — role-slotted credential directory with demo seeding
//! - `password` — Argon2id secret hashing and registration policy
//! - `session` — single-slot session persistence over local storage
//! - `service` — login / registration / logout with observable attempt state
//! - `gate` — role-based authorization of protected portal areas

pub mod directory;
pub mod error;
pub mod gate;
pub mod password;
pub mod service;
pub mod session;

pub use directory::CredentialDirectory;
pub use error::AuthFailure;
pub use gate::{AuthorizationGate, GateDecision, Navigation, ProtectedArea, RedirectTarget};
pub use password::{PasswordHasher, PasswordValidator};
pub use service::{AuthState, AuthenticationService};
pub use session::SessionStore;
