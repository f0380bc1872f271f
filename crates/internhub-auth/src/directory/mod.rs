//! Role-slotted credential directory.

pub mod registry;
pub mod seed;

pub use registry::CredentialDirectory;
pub use seed::{DEMO_ACCOUNTS, DemoAccount};
