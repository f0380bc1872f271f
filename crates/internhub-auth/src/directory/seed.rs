//! Built-in demo accounts, one per role.

use internhub_entity::account::Role;

/// A demo account in plaintext form, hashed when installed.
#[derive(Debug, Clone, Copy)]
pub struct DemoAccount {
    /// Fixed account id.
    pub id: &'static str,
    /// Login email.
    pub email: &'static str,
    /// Plaintext demo secret.
    pub secret: &'static str,
    /// Display name.
    pub display_name: &'static str,
    /// Role slot.
    pub role: Role,
}

/// The three demo accounts installed by [`super::CredentialDirectory::seed`].
pub const DEMO_ACCOUNTS: [DemoAccount; Role::COUNT] = [
    DemoAccount {
        id: "1",
        email: "student@test.com",
        secret: "password",
        display_name: "John Doe",
        role: Role::Student,
    },
    DemoAccount {
        id: "2",
        email: "mentor@test.com",
        secret: "password",
        display_name: "Jane Smith",
        role: Role::Mentor,
    },
    DemoAccount {
        id: "3",
        email: "admin@test.com",
        secret: "password",
        display_name: "Admin User",
        role: Role::Admin,
    },
];

impl DemoAccount {
    /// Demo account for `role`.
    pub fn for_role(role: Role) -> &'static DemoAccount {
        &DEMO_ACCOUNTS[role.index()]
    }
}
