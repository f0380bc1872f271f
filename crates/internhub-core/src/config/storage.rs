//! Local-storage backend configuration.

use serde::{Deserialize, Serialize};

/// Which local-storage backend holds portal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageProviderKind {
    /// Process-lifetime in-memory map.
    Memory,
    /// JSON file on disk, surviving restarts.
    Local,
}

impl Default for StorageProviderKind {
    fn default() -> Self {
        Self::Local
    }
}

impl std::fmt::Display for StorageProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageProviderKind::Memory => write!(f, "memory"),
            StorageProviderKind::Local => write!(f, "local"),
        }
    }
}

/// Local-storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection.
    #[serde(default)]
    pub provider: StorageProviderKind,
    /// Path of the JSON file used by the `local` provider.
    #[serde(default = "default_local_path")]
    pub local_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProviderKind::default(),
            local_path: default_local_path(),
        }
    }
}

fn default_local_path() -> String {
    "data/local_storage.json".to_string()
}
