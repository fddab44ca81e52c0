//! Item Repository
//!
//! Store mutations that persist the resulting sequence before returning it.

use crate::item_list;
use crate::models::Item;
use crate::storage::{self, KeyValueStore};

pub struct ItemRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> ItemRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Rehydrate the store, falling back to `defaults`
    pub fn load_or(&self, defaults: &[Item]) -> Vec<Item> {
        storage::load_items(&self.storage, &self.key, defaults)
    }

    pub fn add(&self, current: &[Item], item: Item) -> Vec<Item> {
        log::debug!("[STORE] Adding item {} ({})", item.id, item.description);
        self.commit(item_list::with_item(current, item))
    }

    pub fn remove(&self, current: &[Item], id: u64) -> Vec<Item> {
        log::debug!("[STORE] Removing item {}", id);
        self.commit(item_list::without_item(current, id))
    }

    /// Replace the whole sequence
    pub fn set_all(&self, items: Vec<Item>) -> Vec<Item> {
        log::debug!("[STORE] Replacing all items ({} total)", items.len());
        self.commit(items)
    }

    fn commit(&self, next: Vec<Item>) -> Vec<Item> {
        // In-memory state stays authoritative when the write fails
        if let Err(e) = storage::save_items(&self.storage, &self.key, &next) {
            log::error!("[STORE] Failed to persist {} items: {}", next.len(), e);
        }
        next
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
