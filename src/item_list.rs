//! Item Sequence Operations
//!
//! Pure functions over the ordered item sequence. Each returns a new
//! sequence and leaves its input untouched.

use crate::models::{CategoryFilter, Item};

/// Append an item, keeping insertion order
pub fn with_item(items: &[Item], item: Item) -> Vec<Item> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

/// Drop the item with `id`; an unknown id yields an identical sequence
pub fn without_item(items: &[Item], id: u64) -> Vec<Item> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

/// Flip `packed` on the item with `id`, all others unchanged
pub fn toggle_packed(items: &[Item], id: u64) -> Vec<Item> {
    items
        .iter()
        .map(|item| {
            if item.id == id {
                Item { packed: !item.packed, ..item.clone() }
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Subsequence matching `filter`, original order preserved
pub fn filter_items(items: &[Item], filter: CategoryFilter) -> Vec<Item> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Hands out timestamp-like ids that never repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Start above every id already in `items`
    pub fn seeded(items: &[Item]) -> Self {
        Self {
            last: items.iter().map(|item| item.id).max().unwrap_or(0),
        }
    }

    /// Next id: the clock reading, bumped past the last id handed out
    pub fn next(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
