//! Item Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the root
//! component writes to it, through [`ItemRepository`] so every write is persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;
use crate::repository::ItemRepository;
use crate::storage::KeyValueStore;

/// Packing list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PackingState {
    /// Ordered item sequence, single source of truth
    pub items: Vec<Item>,
}

/// Type alias for the store
pub type PackingStore = Store<PackingState>;

// ========================
// Store Helper Functions
// ========================

/// Append an item and persist
pub fn store_add_item<S>(store: &PackingStore, repo: &ItemRepository<S>, item: Item)
where
    S: KeyValueStore,
{
    let next = repo.add(&store.items().read_untracked(), item);
    store.items().set(next);
}

/// Remove an item by ID and persist
pub fn store_remove_item<S>(store: &PackingStore, repo: &ItemRepository<S>, id: u64)
where
    S: KeyValueStore,
{
    let next = repo.remove(&store.items().read_untracked(), id);
    store.items().set(next);
}

/// Replace all items and persist
pub fn store_set_items<S>(store: &PackingStore, repo: &ItemRepository<S>, items: Vec<Item>)
where
    S: KeyValueStore,
{
    store.items().set(repo.set_all(items));
}
