//! Key-value persistence
//!
//! Everything that survives a page reload (leaderboard, settings, tuning
//! overrides) goes through [`KeyValueStore`]. The browser backs it with
//! LocalStorage (see `platform::web`); tests and native runs use [`MemoryStore`].
//!
//! Values are JSON strings. Missing or unparsable values are never an error:
//! callers get `None` and fall back to defaults.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Read and parse a JSON value
///
/// Returns `None` if the key is absent or the value does not parse; the
/// latter is logged since it means stored data was corrupted or hand-edited.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed value under '{}': {}", key, e);
            None
        }
    }
}

/// Serialize and store a JSON value
pub fn save_json<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => log::warn!("Failed to serialize '{}': {}", key, e),
    }
}
