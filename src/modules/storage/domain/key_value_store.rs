use serde::{de::DeserializeOwned, Serialize};

use crate::shared::errors::AppResult;

/// Keys the application persists across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// JSON array of movie snapshots
    Favorites,
    /// JSON boolean
    DarkMode,
    /// Raw string, possibly empty
    LastQuery,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Favorites => "favorites",
            StorageKey::DarkMode => "darkMode",
            StorageKey::LastQuery => "lastQuery",
        }
    }
}

/// Durable string-keyed, string-valued storage.
///
/// Writes are synchronous: once `set` returns `Ok`, a fresh reader sees the value.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl dyn KeyValueStore {
    /// Read and decode a JSON value
    pub fn load_json<T: DeserializeOwned>(&self, key: StorageKey) -> AppResult<Option<T>> {
        match self.get(key.as_str())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode and write a JSON value
    pub fn save_json<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key.as_str(), &raw)
    }

    pub fn load_text(&self, key: StorageKey) -> AppResult<Option<String>> {
        self.get(key.as_str())
    }

    pub fn save_text(&self, key: StorageKey, value: &str) -> AppResult<()> {
        self.set(key.as_str(), value)
    }
}
