use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{ContentError, ContentResult};

/// An everyday object the learner sorts into the metal or non-metal bin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationItem {
    /// Unique identifier within a pool.
    pub id: String,
    /// Display name, e.g. "Gold Ring".
    pub name: String,
    /// Ground-truth classification.
    pub category: Category,
    /// Emoji shown next to the name.
    #[serde(default)]
    pub emoji: String,
    /// Color tag for front ends. Opaque to the engines.
    #[serde(default)]
    pub color: String,
}

impl ClassificationItem {
    /// Create an item without presentation metadata.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            emoji: String::new(),
            color: String::new(),
        }
    }

    /// Attach an emoji.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Attach a color tag.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl fmt::Display for ClassificationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emoji.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.emoji, self.name)
        }
    }
}

/// Check that a pool of items is usable by a sorting session:
/// non-empty and free of duplicate ids.
pub fn validate_items(items: &[ClassificationItem]) -> ContentResult<()> {
    if items.is_empty() {
        return Err(ContentError::Empty("sorting items"));
    }
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(ContentError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_emoji_when_present() {
        let plain = ClassificationItem::new("gold", "Gold Ring", Category::Metal);
        assert_eq!(plain.to_string(), "Gold Ring");
        let fancy = plain.with_emoji("\u{1f48d}");
        assert_eq!(fancy.to_string(), "\u{1f48d} Gold Ring");
    }

    #[test]
    fn validate_rejects_empty_pool() {
        assert!(matches!(
            validate_items(&[]),
            Err(ContentError::Empty("sorting items"))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let items = vec![
            ClassificationItem::new("gold", "Gold", Category::Metal),
            ClassificationItem::new("gold", "Gold Again", Category::Metal),
        ];
        match validate_items(&items) {
            Err(ContentError::DuplicateId(id)) => assert_eq!(id, "gold"),
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn metadata_defaults_when_missing_from_json() {
        let item: ClassificationItem =
            serde_json::from_str(r#"{"id":"o","name":"Oxygen","category":"non-metal"}"#).unwrap();
        assert_eq!(item.category, Category::NonMetal);
        assert!(item.emoji.is_empty());
        assert!(item.color.is_empty());
    }
}
