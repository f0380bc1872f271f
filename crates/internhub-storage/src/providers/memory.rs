//! In-memory local-storage provider using dashmap.

use std::sync::Arc;

use dashmap::DashMap;

use internhub_core::result::AppResult;
use internhub_core::traits::storage::KeyValueStore;

/// Process-lifetime local storage.
///
/// Clones share the same underlying map, so a clone behaves like a second
/// tab of the same browser profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Key → value entries.
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        Ok(keys)
    }

    fn clear(&self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }
}
