use std::path::PathBuf;

use crate::category::Category;

/// Alias for `Result<T, ContentError>`.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while loading or validating content.
///
/// Session actions never fail; these only surface when a session or a
/// content pack is constructed.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A table that must contain at least one entry is empty.
    #[error("no {0} in content")]
    Empty(&'static str),

    /// Two entries of the same table share an id.
    #[error("duplicate id: \"{0}\"")]
    DuplicateId(String),

    /// A quiz question offers fewer than two options.
    #[error("question {question} has {count} option(s), at least 2 are required")]
    TooFewOptions {
        /// Id of the offending question.
        question: u32,
        /// Number of options it has.
        count: usize,
    },

    /// A quiz question's correct index does not point at one of its options.
    #[error("question {question}: correct option {correct} is out of range (0..{options})")]
    CorrectOutOfRange {
        /// Id of the offending question.
        question: u32,
        /// The declared correct index.
        correct: usize,
        /// Number of options.
        options: usize,
    },

    /// The sorting items of a pack never use one of the two categories.
    #[error("sorting items contain no {0} entries")]
    MissingCategory(Category),

    /// A content pack could not be parsed.
    #[error("invalid content pack: {0}")]
    Json(#[from] serde_json::Error),

    /// A content pack file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
