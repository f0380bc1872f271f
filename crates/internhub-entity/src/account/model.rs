//! Account entity model.

use std::fmt;

use internhub_core::types::AccountId;

use super::role::Role;
use crate::session::Session;

/// One registrable identity occupying a role slot of the credential directory.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// Opaque unique identifier.
    pub id: AccountId,
    /// Login email, compared by exact case-sensitive equality.
    pub email: String,
    /// Argon2id PHC string of the account secret.
    pub secret_hash: String,
    /// Human-readable display name.
    pub display_name: String,
    /// The role slot this account occupies.
    pub role: Role,
}

impl Account {
    /// Project this account into a session, stripping the secret.
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            role: self.role,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("secret_hash", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("role", &self.role)
            .finish()
    }
}
