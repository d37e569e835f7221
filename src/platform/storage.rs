//! Key/value storage for small JSON blobs
//!
//! Progress and settings go through [`StorageBackend`] so they can be tested
//! natively and persisted to LocalStorage in the browser.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::GardenError;

pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GardenError>;
}

/// Process-local storage (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GardenError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// `None` when the page has no storage (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GardenError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| GardenError::Storage(format!("{e:?}")))
    }
}

/// Read and parse `key`; missing or unparsable data yields `None`
pub fn load_json<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding corrupt '{}' ({})", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize>(
    storage: &mut dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), GardenError> {
    let json = serde_json::to_string(value)?;
    storage.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);
        storage.set("k", "v").unwrap();
        storage.set("k", "w").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("w"));
    }

    #[test]
    fn corrupt_json_is_none() {
        let mut storage = MemoryStorage::new();
        storage.set("n", "{not json").unwrap();
        assert_eq!(load_json::<u32>(&storage, "n"), None);

        save_json(&mut storage, "n", &42u32).unwrap();
        assert_eq!(load_json::<u32>(&storage, "n"), Some(42));
    }
}
