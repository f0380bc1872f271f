//! Session persistence over local storage.

use std::sync::Arc;

use tracing::{debug, warn};

use internhub_core::config::SessionConfig;
use internhub_core::error::AppError;
use internhub_core::traits::storage::{KeyValueStore, KeyValueStoreExt};
use internhub_entity::session::Session;

/// Persists the current session as one JSON document under a fixed key.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Local-storage scope holding the session.
    storage: Arc<dyn KeyValueStore>,
    /// Storage key of the session document.
    key: String,
}

impl SessionStore {
    /// Creates a session store over `storage`.
    pub fn new(storage: Arc<dyn KeyValueStore>, config: &SessionConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    /// Storage key of the session document.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the persisted session, surfacing storage and parse errors.
    pub fn try_load(&self) -> Result<Option<Session>, AppError> {
        self.storage.get_json::<Session>(&self.key)
    }

    /// Reads the persisted session.
    ///
    /// Missing, unreadable, and malformed state all load as `None`; the
    /// latter two are logged and otherwise swallowed.
    pub fn load(&self) -> Option<Session> {
        match self.try_load() {
            Ok(session) => session,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring corrupt session state");
                None
            }
        }
    }

    /// Persists `session`, replacing any previous one.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        self.storage.set_json(&self.key, session)?;
        debug!(key = %self.key, account_id = %session.id, role = %session.role, "Session saved");
        Ok(())
    }

    /// Removes the persisted session. Clearing an empty store is a no-op.
    pub fn clear(&self) -> Result<(), AppError> {
        self.storage.remove(&self.key)?;
        debug!(key = %self.key, "Session cleared");
        Ok(())
    }
}
