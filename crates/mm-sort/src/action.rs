//! Learner actions understood by the sorting engine.

use mm_core::Category;

/// One discrete learner action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortAction {
    /// Pick up the pool item with this id.
    Select(String),
    /// Drop the held item into a bin.
    DropInto(Category),
    /// Start over with the full item set.
    Reset,
}

impl SortAction {
    /// Shorthand for [`SortAction::Select`].
    pub fn select(id: impl Into<String>) -> Self {
        Self::Select(id.into())
    }
}
