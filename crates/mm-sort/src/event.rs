//! Feedback events emitted by the sorting engine.

use std::fmt;

use mm_core::Category;

/// What happened as the result of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// The held item was dropped into its matching bin.
    Correct {
        /// Display name of the placed item.
        item: String,
        /// The bin it now sits in.
        bin: Category,
    },
    /// The held item was dropped into the wrong bin and stays in the pool.
    ///
    /// Only the attempted bin is reported, never the item's real category.
    Incorrect {
        /// Display name of the item.
        item: String,
        /// The bin the learner tried.
        attempted: Category,
    },
    /// The last item was placed.
    Completed {
        /// Final score.
        score: u32,
    },
}

impl SortEvent {
    /// Whether this is positive feedback.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Incorrect { .. })
    }

    /// Short title line for a toast or banner.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Correct { .. } => "Correct! \u{1f389}",
            Self::Incorrect { .. } => "Oops! Try again \u{1f60a}",
            Self::Completed { .. } => "Congratulations! \u{1f3c6}",
        }
    }
}

impl fmt::Display for SortEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct { item, bin } => write!(f, "{item} is indeed a {bin}!"),
            Self::Incorrect { item, attempted } => {
                write!(f, "{item} doesn't go in the {} box!", attempted.plural())
            }
            Self::Completed { score } => write!(
                f,
                "You've sorted all items correctly! Final score: {score}"
            ),
        }
    }
}
