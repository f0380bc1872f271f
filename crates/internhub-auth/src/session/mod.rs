//! Single-slot persistence of the authenticated session.

pub mod store;

pub use store::SessionStore;
