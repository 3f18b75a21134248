use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Unique identifier within a quiz.
    pub id: u32,
    /// The question text.
    pub prompt: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Shown once the answer has been submitted.
    pub explanation: String,
    /// Emoji shown above the prompt.
    #[serde(default)]
    pub emoji: String,
}

impl QuizQuestion {
    /// Check the question has at least two options and a valid correct index.
    pub fn validate(&self) -> ContentResult<()> {
        if self.options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                question: self.id,
                count: self.options.len(),
            });
        }
        if self.correct >= self.options.len() {
            return Err(ContentError::CorrectOutOfRange {
                question: self.id,
                correct: self.correct,
                options: self.options.len(),
            });
        }
        Ok(())
    }

    /// Whether `option` is the correct answer.
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    /// The correct option's text.
    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Letter label for an option index: 0 → `A`, 1 → `B`, ...
    pub fn option_letter(index: usize) -> char {
        u8::try_from(index)
            .ok()
            .and_then(|i| b'A'.checked_add(i))
            .filter(u8::is_ascii_uppercase)
            .map(char::from)
            .unwrap_or('?')
    }
}

/// Check that a list of questions is usable by a quiz session:
/// non-empty, every question valid, and ids unique.
pub fn validate_questions(questions: &[QuizQuestion]) -> ContentResult<()> {
    if questions.is_empty() {
        return Err(ContentError::Empty("quiz questions"));
    }
    let mut seen = HashSet::new();
    for question in questions {
        question.validate()?;
        if !seen.insert(question.id) {
            return Err(ContentError::DuplicateId(question.id.to_string()));
        }
    }
    Ok(())
}
