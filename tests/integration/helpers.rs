//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;

use internhub::{AppConfig, Portal};
use internhub_core::config::{AuthConfig, StorageProviderKind};
use internhub_core::traits::storage::KeyValueStore;
use internhub_storage::providers::{LocalFileStore, MemoryStore};

/// Demo secret shared by the seeded accounts.
pub const DEMO_SECRET: &str = "password";

/// Test application context
pub struct TestApp {
    /// The portal under test
    pub portal: Portal,
    /// Backing local storage, for direct inspection
    pub storage: Arc<dyn KeyValueStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Portal over a fresh in-memory profile.
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStore::new()))
    }

    /// Portal over a file-backed profile at `path`.
    pub fn with_file(path: &Path) -> Self {
        let store = LocalFileStore::open(path).expect("Failed to open file store");
        Self::with_storage(Arc::new(store))
    }

    /// Portal over an existing storage scope, as after a page reload.
    pub fn with_storage(storage: Arc<dyn KeyValueStore>) -> Self {
        let config = test_config();
        let portal =
            Portal::with_storage(&config, storage.clone()).expect("Failed to build portal");
        Self {
            portal,
            storage,
            config,
        }
    }

    /// Raw value stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.get(key).expect("Failed to read storage")
    }

    /// Raw session document.
    pub fn raw_session(&self) -> Option<String> {
        self.raw(&self.config.session.storage_key)
    }
}

/// Config with a cheap hash cost and in-memory storage.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth = AuthConfig {
        hash_memory_kib: 64,
        hash_iterations: 1,
        ..AuthConfig::default()
    };
    config.storage.provider = StorageProviderKind::Memory;
    config
}
