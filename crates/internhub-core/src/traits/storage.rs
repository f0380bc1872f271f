//! Local-storage trait for pluggable key-value backends.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result::AppResult;

/// Trait for a single local-storage scope (one browser profile, one data file).
///
/// Values are opaque strings, typically JSON documents. Every call is a
/// single synchronous operation; a `set` either fully replaces the previous
/// value or fails without touching it.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type identifier (e.g., `"memory"`, `"local"`).
    fn provider_type(&self) -> &str;

    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;

    /// List all keys currently stored, sorted.
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Remove every key in this scope.
    fn clear(&self) -> AppResult<()> {
        for key in self.keys()? {
            self.remove(&key)?;
        }
        Ok(())
    }
}

/// JSON helpers layered over any [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Serialize `value` as JSON and store it under `key`.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.set(key, &json)
    }

    /// Read and deserialize the JSON value under `key`.
    ///
    /// A missing key is `Ok(None)`; a malformed value is a serialization error.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
