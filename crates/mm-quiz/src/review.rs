//! Per-question breakdown for the results screen.

use mm_core::QuizQuestion;

/// One answered question together with the learner's submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerReview<'a> {
    /// The question as asked.
    pub question: &'a QuizQuestion,
    /// The submitted option index.
    pub chosen: usize,
}

impl AnswerReview<'_> {
    /// Whether the submission was right.
    pub fn is_correct(&self) -> bool {
        self.question.is_correct(self.chosen)
    }

    /// Text of the submitted option.
    pub fn chosen_text(&self) -> &str {
        self.question
            .options
            .get(self.chosen)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
