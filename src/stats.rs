//! Packing Statistics
//!
//! Derived purely from the item sequence.

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackingStats {
    pub total: usize,
    pub packed: usize,
    /// Rounded half up; 0 for an empty list
    pub percentage: u32,
}

impl PackingStats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        Self {
            total,
            packed,
            percentage: percentage(packed, total),
        }
    }

    /// Footer sentence shown under the form
    pub fn summary(&self) -> String {
        format!(
            "You have {} items in the list. You already packed {} ({}%).",
            self.total, self.packed, self.percentage
        )
    }
}

fn percentage(packed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // round(100 * packed / total) in integers
    ((200 * packed + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Quantity};

    fn items(packed_flags: &[bool]) -> Vec<Item> {
        packed_flags
            .iter()
            .enumerate()
            .map(|(i, &packed)| Item {
                packed,
                ..Item::new(i as u64 + 1, "x", Quantity::default(), Category::Clothing)
            })
            .collect()
    }

    #[test]
    fn test_empty_list_is_zero_percent() {
        let stats = PackingStats::from_items(&[]);
        assert_eq!(stats, PackingStats { total: 0, packed: 0, percentage: 0 });
        assert_eq!(stats.summary(), "You have 0 items in the list. You already packed 0 (0%).");
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(PackingStats::from_items(&items(&[true, false, false])).percentage, 33);
        assert_eq!(PackingStats::from_items(&items(&[true, true, false])).percentage, 67);
        assert_eq!(PackingStats::from_items(&items(&[true, false])).percentage, 50);
        assert_eq!(PackingStats::from_items(&items(&[true; 4])).percentage, 100);
        // 1/8 = 12.5% rounds up
        let mut eighth = vec![false; 8];
        eighth[0] = true;
        assert_eq!(PackingStats::from_items(&items(&eighth)).percentage, 13);
    }

    #[test]
    fn test_summary() {
        let stats = PackingStats::from_items(&items(&[true, false, true, false]));
        assert_eq!(stats.summary(), "You have 4 items in the list. You already packed 2 (50%).");
    }
}
