//! Item definitions - one candidate entity per record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalize an item name: case-fold and remove all whitespace.
///
/// Names are identifiers, not display text. Uniqueness is not enforced;
/// duplicates across sources simply appear as separate candidates.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// A candidate entity with a name and a boolean attribute vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Normalized identifier.
    pub name: String,

    /// Logical name of the source table; doubles as the subcategory key
    /// used for routing.
    pub group: String,

    /// Display label, defaults to the group.
    pub subcategory: String,

    /// Attribute flags. A missing attribute reads as `false`.
    pub attributes: HashMap<String, bool>,
}

impl Item {
    /// Create a new item in the given group. The name is normalized and
    /// the subcategory defaults to the group.
    pub fn new(name: impl AsRef<str>, group: impl Into<String>) -> Self {
        let group = group.into();
        Self {
            name: normalize_name(name.as_ref()),
            subcategory: group.clone(),
            group,
            attributes: HashMap::new(),
        }
    }

    /// Set the display subcategory.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Set an attribute flag.
    pub fn with_attribute(mut self, name: impl Into<String>, value: bool) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Value of an attribute; absent attributes are `false`.
    pub fn attribute(&self, name: &str) -> bool {
        self.attributes.get(name).copied().unwrap_or(false)
    }
}
