//! App Configuration
//!
//! Passed explicitly to the root component.

use log::LevelFilter;

use crate::models::{Category, Item, Quantity};

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// localStorage slot holding the item list
    pub storage_key: String,
    /// Used when nothing usable is stored
    pub default_items: Vec<Item>,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "travelList".to_string(),
            default_items: default_items(),
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}

fn default_items() -> Vec<Item> {
    [(1, "Shirt", 5), (2, "Pants", 2)]
        .into_iter()
        .filter_map(|(id, description, quantity)| {
            let quantity = Quantity::try_from(quantity).ok()?;
            Some(Item::new(id, description, quantity, Category::Clothing))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "travelList");
        let names: Vec<&str> = config.default_items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(names, vec!["Shirt", "Pants"]);
        assert_eq!(config.default_items[0].quantity.get(), 5);
        assert!(config.default_items.iter().all(|i| !i.packed && i.category == Category::Clothing));
    }
}
