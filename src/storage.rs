//! Persistence Adapter
//!
//! A single key-value slot holding the JSON item sequence.

use std::collections::HashSet;

use wasm_bindgen::JsValue;

use crate::error::{LoadError, StorageError};
use crate::models::Item;

/// String key-value slots (browser `localStorage` or an in-memory map)
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Js(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Serialize the full sequence into the slot
pub fn save_items<S: KeyValueStore>(storage: &S, key: &str, items: &[Item]) -> Result<(), StorageError> {
    let json = serde_json::to_string(items).map_err(|e| StorageError::Encode(e.to_string()))?;
    storage.write(key, &json)
}

/// Largest id a JS number holds exactly (`Number.MAX_SAFE_INTEGER`)
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Read the slot; `Ok(None)` when nothing was stored
pub fn try_load_items<S: KeyValueStore>(storage: &S, key: &str) -> Result<Option<Vec<Item>>, LoadError> {
    let Some(json) = storage.read(key)? else {
        return Ok(None);
    };
    let items: Vec<Item> = serde_json::from_str(&json)?;
    if let Some(item) = items.iter().find(|item| item.id > MAX_SAFE_ID) {
        return Err(LoadError::UnsafeId(item.id));
    }
    let mut seen = HashSet::with_capacity(items.len());
    if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
        return Err(LoadError::DuplicateId(dup.id));
    }
    Ok(Some(items))
}

/// Stored sequence, or `defaults` when the slot is absent or unusable
pub fn load_items<S: KeyValueStore>(storage: &S, key: &str, defaults: &[Item]) -> Vec<Item> {
    match try_load_items(storage, key) {
        Ok(Some(items)) => {
            log::debug!("[STORAGE] Loaded {} items from `{}`", items.len(), key);
            items
        }
        Ok(None) => {
            log::info!("[STORAGE] Nothing stored under `{}`, using defaults", key);
            defaults.to_vec()
        }
        Err(e) => {
            log::warn!("[STORAGE] Ignoring stored items under `{}`: {}", key, e);
            defaults.to_vec()
        }
    }
}

/// In-memory slots for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: std::cell::RefCell<std::collections::HashMap<String, String>>,
    writes: std::cell::Cell<usize>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slot(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Js("QuotaExceededError".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
