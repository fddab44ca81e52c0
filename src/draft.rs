//! Item Draft
//!
//! Add form input and its conversion into a new item.

use crate::error::DraftError;
use crate::models::{Category, Item, Quantity};

/// Raw form values at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    /// Selector value, parsed on submit
    pub quantity: String,
    pub category: Category,
    pub description: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            quantity: Quantity::default().to_string(),
            category: Category::default(),
            description: String::new(),
        }
    }
}

impl ItemDraft {
    /// Validate and build an unpacked item
    ///
    /// `next_id` is only called once the draft is valid.
    pub fn build(self, next_id: impl FnOnce() -> u64) -> Result<Item, DraftError> {
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        let quantity: Quantity = self.quantity.parse()?;
        Ok(Item::new(next_id(), self.description, quantity, self.category))
    }

    /// Form values after a successful submit: category kept, the rest reset
    pub fn after_submit(&self) -> ItemDraft {
        ItemDraft {
            category: self.category,
            ..ItemDraft::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuantityError;

    fn draft(quantity: &str, category: Category, description: &str) -> ItemDraft {
        ItemDraft {
            quantity: quantity.to_string(),
            category,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_build_item() {
        let item = draft("3", Category::Electronics, "Charger").build(|| 99).unwrap();
        assert_eq!(item.id, 99);
        assert_eq!(item.description, "Charger");
        assert_eq!(item.quantity.get(), 3);
        assert_eq!(item.category, Category::Electronics);
        assert!(!item.packed);
    }

    #[test]
    fn test_empty_description_rejected_without_id() {
        let mut drawn = false;
        let result = draft("1", Category::Clothing, "").build(|| {
            drawn = true;
            1
        });
        assert_eq!(result, Err(DraftError::EmptyDescription));
        assert!(!drawn);

        assert_eq!(draft("1", Category::Clothing, "   ").build(|| 1), Err(DraftError::EmptyDescription));
    }

    #[test]
    fn test_invalid_quantity_rejected() {
        assert_eq!(
            draft("lots", Category::Clothing, "Socks").build(|| 1),
            Err(DraftError::InvalidQuantity(QuantityError::NotANumber("lots".to_string())))
        );
        assert!(matches!(
            draft("9", Category::Clothing, "Socks").build(|| 1),
            Err(DraftError::InvalidQuantity(QuantityError::OutOfRange { value: 9, .. }))
        ));
    }

    #[test]
    fn test_description_stored_as_typed() {
        let item = draft("1", Category::Documents, " Passport ").build(|| 5).unwrap();
        assert_eq!(item.description, " Passport ");
    }

    #[test]
    fn test_after_submit_keeps_category() {
        let submitted = draft("4", Category::Electronics, "Camera");
        let next = submitted.after_submit();
        assert_eq!(next.quantity, "1");
        assert!(next.description.is_empty());
        assert_eq!(next.category, Category::Electronics);
    }

    #[test]
    fn test_default_draft() {
        let d = ItemDraft::default();
        assert_eq!(d.quantity, "1");
        assert_eq!(d.category, Category::Clothing);
        assert!(d.description.is_empty());
    }
}
