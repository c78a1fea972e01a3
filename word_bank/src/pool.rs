//! Candidate pools - the merged, schema-unified universe for one category.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::table::AttributeTable;

/// The per-category union of attribute tables.
///
/// Rows keep table arrival order, then row order within each table.
/// Columns are the union of every table's attribute names in first-seen
/// order, and any cell absent from a row's source table is filled `false`.
/// Every item in a pool therefore holds a value for every pool column:
/// an item's flag vector is pool-relative, it depends on which sibling
/// tables were merged with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatePool {
    items: Vec<Item>,
    attribute_names: Vec<String>,
}

impl CandidatePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge zero or more attribute tables into one pool.
    ///
    /// Zero tables (or all-empty tables) produce an empty pool; callers
    /// must treat that as "no data for this category" rather than filter
    /// it.
    pub fn build(tables: &[AttributeTable]) -> Self {
        let mut attribute_names: Vec<String> = Vec::new();
        for table in tables {
            for column in &table.attribute_names {
                if !attribute_names.contains(column) {
                    attribute_names.push(column.clone());
                }
            }
        }

        let mut items = Vec::new();
        for table in tables {
            for row in &table.rows {
                let mut item = row.clone();
                for column in &attribute_names {
                    item.attributes.entry(column.clone()).or_insert(false);
                }
                items.push(item);
            }
        }

        Self {
            items,
            attribute_names,
        }
    }

    /// All items in arrival order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Union of attribute columns in first-seen order.
    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Whether the pool carries the given attribute column.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_names.iter().any(|c| c == name)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Group names in first-seen row order.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for item in &self.items {
            if !names.contains(&item.group.as_str()) {
                names.push(&item.group);
            }
        }
        names
    }

    /// Whether any item belongs to the given group.
    pub fn has_group(&self, group: &str) -> bool {
        self.items.iter().any(|i| i.group == group)
    }

    /// Number of items in the given group.
    pub fn group_count(&self, group: &str) -> usize {
        self.items.iter().filter(|i| i.group == group).count()
    }

    /// Items of the given group, in arrival order.
    pub fn items_in_group(&self, group: &str) -> Vec<&Item> {
        self.items.iter().filter(|i| i.group == group).collect()
    }

    /// The group with the most rows.
    ///
    /// Ties keep the group whose rows appear first in the pool, so the
    /// result is deterministic. `None` only for an empty pool.
    pub fn largest_group(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for group in self.group_names() {
            let count = self.group_count(group);
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((group, count)),
            }
        }
        best.map(|(group, _)| group)
    }
}
