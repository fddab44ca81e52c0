//! Frontend Models
//!
//! The packing list item and the closed value sets it is built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CategoryError, QuantityError};

/// A single packing list entry
///
/// Field order matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, never reused
    pub id: u64,
    pub description: String,
    pub quantity: Quantity,
    /// Only field that changes after creation
    pub packed: bool,
    pub category: Category,
}

impl Item {
    /// Create an unpacked item
    pub fn new(id: u64, description: impl Into<String>, quantity: Quantity, category: Category) -> Self {
        Self {
            id,
            description: description.into(),
            quantity,
            packed: false,
            category,
        }
    }
}

/// How many of an item to pack (1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }

    /// All selectable quantities in ascending order
    pub fn all() -> impl Iterator<Item = Quantity> {
        (Self::MIN..=Self::MAX).map(Quantity)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity(Self::MIN)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Quantity(value))
        } else {
            Err(QuantityError::OutOfRange { value, min: Self::MIN, max: Self::MAX })
        }
    }
}

impl From<Quantity> for u8 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| QuantityError::NotANumber(s.to_string()))?;
        Quantity::try_from(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Clothing,
    Electronics,
    Documents,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Clothing, Category::Electronics, Category::Documents];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Documents => "Documents",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// List view filter selection (never persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter options in selector order
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(7, "Charger", Quantity::default(), Category::Electronics);
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity.get(), 1);
        assert!(!item.packed);
    }

    #[test]
    fn test_quantity_parse() {
        assert_eq!("3".parse::<Quantity>().map(Quantity::get), Ok(3));
        assert_eq!(" 5 ".parse::<Quantity>().map(Quantity::get), Ok(5));
        assert_eq!("abc".parse::<Quantity>(), Err(QuantityError::NotANumber("abc".to_string())));
        assert_eq!("".parse::<Quantity>(), Err(QuantityError::NotANumber(String::new())));
        assert_eq!(
            "0".parse::<Quantity>(),
            Err(QuantityError::OutOfRange { value: 0, min: 1, max: 5 })
        );
        assert!("6".parse::<Quantity>().is_err());
        assert!("-1".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_quantity_choices() {
        let all: Vec<u8> = Quantity::all().map(Quantity::get).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Documents".parse::<Category>(), Ok(Category::Documents));
        assert_eq!("documents".parse::<Category>(), Err(CategoryError("documents".to_string())));
        assert_eq!(Category::default(), Category::Clothing);
    }

    #[test]
    fn test_filter_parse_and_match() {
        let shirt = Item::new(1, "Shirt", Quantity::default(), Category::Clothing);
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        let only_docs: CategoryFilter = "Documents".parse().unwrap();
        assert!(!only_docs.matches(&shirt));
        assert!(CategoryFilter::All.matches(&shirt));
        assert!("Shoes".parse::<CategoryFilter>().is_err());

        let labels: Vec<&str> = CategoryFilter::options().map(|f| f.as_str()).collect();
        assert_eq!(labels, vec!["All", "Clothing", "Electronics", "Documents"]);
    }

    #[test]
    fn test_item_json_layout() {
        let item = Item::new(1, "Shirt", Quantity::try_from(5).unwrap(), Category::Clothing);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":1,"description":"Shirt","quantity":5,"packed":false,"category":"Clothing"}"#);
    }

    #[test]
    fn test_item_rejects_out_of_set_values() {
        let bad_quantity = r#"{"id":1,"description":"Shirt","quantity":9,"packed":false,"category":"Clothing"}"#;
        assert!(serde_json::from_str::<Item>(bad_quantity).is_err());
        let bad_category = r#"{"id":1,"description":"Shirt","quantity":1,"packed":false,"category":"Food"}"#;
        assert!(serde_json::from_str::<Item>(bad_category).is_err());
    }
}
