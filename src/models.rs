//! Frontend Models
//!
//! Data structures for the reorderable list.

use serde::Serialize;

/// A row in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Stable identifier, `item-<k>`
    pub id: String,
    /// Display label, `item <k>`
    pub content: String,
}

impl Item {
    pub fn new(k: usize) -> Self {
        Self {
            id: format!("item-{}", k),
            content: format!("item {}", k),
        }
    }
}

/// Generate `count` items in initial order
pub fn get_items(count: usize) -> Vec<Item> {
    (0..count).map(Item::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_items() {
        let items = get_items(10);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0].id, "item-0");
        assert_eq!(items[0].content, "item 0");
        assert_eq!(items[9].id, "item-9");
        assert_eq!(items[9].content, "item 9");
    }

    #[test]
    fn test_get_items_empty() {
        assert!(get_items(0).is_empty());
    }
}
