//! Attribute tables - one per data source, keyed by group.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// A normalized table of items with boolean attribute flags.
///
/// The ordered `attribute_names` list is the authoritative set of askable
/// attributes for this group during narrowing. It is kept alongside the
/// rows because the merged pool may carry extra false-filled columns from
/// sibling tables that are not meaningful to ask about for this group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeTable {
    /// Logical source name; every row carries it as its group.
    pub group: String,

    /// Attribute columns in source order.
    pub attribute_names: Vec<String>,

    /// Item rows in source order.
    pub rows: Vec<Item>,
}

impl AttributeTable {
    /// Create an empty table for the given group.
    pub fn new(group: impl Into<String>, attribute_names: Vec<String>) -> Self {
        Self {
            group: group.into(),
            attribute_names,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, item: Item) {
        self.rows.push(item);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
