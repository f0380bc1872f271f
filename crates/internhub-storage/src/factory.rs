//! Builds the configured local-storage backend.

use std::sync::Arc;

use tracing::info;

use internhub_core::config::{StorageConfig, StorageProviderKind};
use internhub_core::error::AppError;
use internhub_core::result::AppResult;
use internhub_core::traits::storage::KeyValueStore;

/// Open the local-storage backend selected by `config`.
pub fn open_store(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.provider {
        #[cfg(feature = "memory")]
        StorageProviderKind::Memory => Arc::new(crate::providers::MemoryStore::new()),
        #[cfg(feature = "local")]
        StorageProviderKind::Local => {
            Arc::new(crate::providers::LocalFileStore::open(&config.local_path)?)
        }
        #[allow(unreachable_patterns)]
        other => {
            return Err(AppError::configuration(format!(
                "Storage provider '{other}' is not compiled in"
            )));
        }
    };

    info!(provider = store.provider_type(), "Local storage ready");
    Ok(store)
}
