//! Account domain entities.

pub mod model;
pub mod role;

pub use model::Account;
pub use role::Role;
