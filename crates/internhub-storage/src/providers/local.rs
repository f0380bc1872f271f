//! JSON-file local-storage provider.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, warn};

use internhub_core::error::{AppError, ErrorKind};
use internhub_core::result::AppResult;
use internhub_core::traits::storage::KeyValueStore;

/// Local storage persisted as a single JSON object file.
///
/// The whole map is held in memory and rewritten on every mutation through
/// a sibling temp file followed by a rename, so readers of the file never
/// observe a half-written document.
#[derive(Debug)]
pub struct LocalFileStore {
    /// Path of the backing JSON file.
    path: PathBuf,
    /// In-memory copy of the file contents.
    entries: Mutex<BTreeMap<String, String>>,
}

impl LocalFileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A file that is not a JSON object of strings is discarded with a
    /// warning and the store starts empty.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create storage directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Discarding unreadable local storage file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read local storage: {}", path.display()),
                    e,
                ));
            }
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened local storage");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk atomically.
    fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");

        let write = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &self.path)
        };

        write().map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write local storage: {}", self.path.display()),
                e,
            )
        })
    }
}

impl KeyValueStore for LocalFileStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock();
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock();
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.lock().keys().cloned().collect())
    }

    fn clear(&self) -> AppResult<()> {
        let mut entries = self.entries.lock();
        let next = BTreeMap::new();
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile").join("storage.json");

        let store = LocalFileStore::open(&path).unwrap();
        store.set("pm_portal_user", r#"{"id":"1"}"#).unwrap();
        store.set("other", "x").unwrap();
        store.remove("other").unwrap();
        drop(store);

        let reopened = LocalFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("pm_portal_user").unwrap(),
            Some(r#"{"id":"1"}"#.to_string())
        );
        assert_eq!(reopened.get("other").unwrap(), None);
        assert_eq!(reopened.keys().unwrap(), vec!["pm_portal_user".to_string()]);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2, 3").unwrap();

        let store = LocalFileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());

        store.set("k", "v").unwrap();
        let reopened = LocalFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_remove_missing_key_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = LocalFileStore::open(&path).unwrap();
        store.remove("nothing").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_empties_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = LocalFileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.clear().unwrap();

        let reopened = LocalFileStore::open(&path).unwrap();
        assert!(reopened.keys().unwrap().is_empty());
        assert_eq!(store.provider_type(), "local");
        assert_eq!(store.path(), path.as_path());
    }
}
