//! In-memory credential directory with one account slot per role.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use internhub_core::error::AppError;
use internhub_core::types::AccountId;
use internhub_entity::account::{Account, Role};

use super::seed::DEMO_ACCOUNTS;
use crate::password::PasswordHasher;

/// Maps each role to at most one account.
///
/// Registration replaces the slot for its role (last writer wins), including
/// a seeded demo account. The directory is never persisted.
#[derive(Debug)]
pub struct CredentialDirectory {
    /// Slot per role, indexed by [`Role::index`].
    slots: RwLock<[Option<Account>; Role::COUNT]>,
    /// Hasher used when installing demo accounts.
    hasher: Arc<PasswordHasher>,
}

impl CredentialDirectory {
    /// Creates an empty directory.
    pub fn new(hasher: Arc<PasswordHasher>) -> Self {
        Self {
            slots: RwLock::new([None, None, None]),
            hasher,
        }
    }

    /// Creates a directory holding the three demo accounts.
    pub fn seeded(hasher: Arc<PasswordHasher>) -> Result<Self, AppError> {
        let directory = Self::new(hasher);
        directory.seed()?;
        Ok(directory)
    }

    /// Installs the demo accounts, replacing whatever occupies their slots.
    pub fn seed(&self) -> Result<(), AppError> {
        let mut seeded = Vec::with_capacity(DEMO_ACCOUNTS.len());
        for demo in &DEMO_ACCOUNTS {
            seeded.push(Account {
                id: AccountId::new(demo.id),
                email: demo.email.to_string(),
                secret_hash: self.hasher.hash_password(demo.secret)?,
                display_name: demo.display_name.to_string(),
                role: demo.role,
            });
        }

        {
            let mut slots = self.slots.write();
            for account in seeded {
                let index = account.role.index();
                slots[index] = Some(account);
            }
        }

        info!(accounts = self.len(), "Seeded demo accounts");
        Ok(())
    }

    /// Empties every slot.
    pub fn clear(&self) {
        *self.slots.write() = [None, None, None];
    }

    /// Restores the freshly seeded state.
    pub fn reset(&self) -> Result<(), AppError> {
        self.clear();
        self.seed()
    }

    /// Account occupying the `role` slot.
    pub fn find(&self, role: Role) -> Option<Account> {
        self.slots.read()[role.index()].clone()
    }

    /// Replaces the `role` slot, returning the previous occupant.
    ///
    /// The account must carry the role of the slot it is stored in.
    pub fn upsert(&self, role: Role, account: Account) -> Result<Option<Account>, AppError> {
        if account.role != role {
            return Err(AppError::validation(format!(
                "Account role '{}' does not match slot '{role}'",
                account.role
            )));
        }

        let previous = self.slots.write()[role.index()].replace(account);
        debug!(
            role = %role,
            replaced = previous.as_ref().map(|a| a.id.as_str()),
            "Credential slot updated"
        );
        Ok(previous)
    }

    /// Puts `previous` back into the `role` slot, undoing an [`upsert`](Self::upsert).
    pub(crate) fn restore(&self, role: Role, previous: Option<Account>) {
        self.slots.write()[role.index()] = previous;
    }

    /// Whether any slot holds an account with exactly this email.
    pub fn exists(&self, email: &str) -> bool {
        self.slots
            .read()
            .iter()
            .flatten()
            .any(|account| account.email == email)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.read().iter().flatten().count()
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
