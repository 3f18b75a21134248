use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A chemical element as presented by the reference browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, e.g. `gold`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Metal or non-metal.
    pub category: Category,
    /// Short description, suitable for reading aloud.
    pub description: String,
    /// A fun fact for the detail card.
    pub fun_fact: String,
    /// Characteristic properties, in display order.
    #[serde(default)]
    pub properties: Vec<String>,
    /// Emoji shown on the element card.
    #[serde(default)]
    pub emoji: String,
    /// Color tag for front ends.
    #[serde(default)]
    pub color: String,
}

impl Element {
    /// Whether this element matches a lookup key by id or by name,
    /// ignoring case.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.eq_ignore_ascii_case(key) || self.name.eq_ignore_ascii_case(key)
    }
}
