//! Feedback events emitted by the quiz engine.

use std::fmt;

use crate::rating::Rating;

/// What happened as the result of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    /// The submitted option was right.
    Correct {
        /// Id of the answered question.
        question: u32,
        /// The submitted option.
        option: usize,
        /// Explanation to show alongside the feedback.
        explanation: String,
    },
    /// The submitted option was wrong.
    Incorrect {
        /// Id of the answered question.
        question: u32,
        /// The submitted option.
        chosen: usize,
        /// The option that would have been right.
        correct: usize,
        /// Explanation to show alongside the feedback.
        explanation: String,
    },
    /// The last question was scored and the learner moved past it.
    Completed {
        /// Final score.
        score: u32,
        /// Best possible score.
        max_score: u32,
        /// Rating derived from the final score.
        rating: Rating,
    },
}

impl QuizEvent {
    /// Whether this is positive feedback. Completion counts as positive.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Incorrect { .. })
    }

    /// Short title line for a toast or banner.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Correct { .. } => "Correct! \u{1f389}",
            Self::Incorrect { .. } => "Not quite right \u{1f60a}",
            Self::Completed { rating, .. } => rating.label(),
        }
    }

    /// Explanation text, for answer feedback.
    pub fn explanation(&self) -> Option<&str> {
        match self {
            Self::Correct { explanation, .. } | Self::Incorrect { explanation, .. } => {
                Some(explanation.as_str())
            }
            Self::Completed { .. } => None,
        }
    }
}

impl fmt::Display for QuizEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct { .. } => write!(f, "Great job!"),
            Self::Incorrect { .. } => write!(f, "Don't worry, keep learning!"),
            Self::Completed {
                score,
                max_score,
                rating,
            } => write!(f, "{score} / {max_score} points. {rating}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explanation_only_on_answers() {
        let ok = QuizEvent::Correct {
            question: 1,
            option: 1,
            explanation: "Gold is a metal.".into(),
        };
        assert_eq!(ok.explanation(), Some("Gold is a metal."));
        assert!(ok.is_success());

        let done = QuizEvent::Completed {
            score: 90,
            max_score: 100,
            rating: Rating::Amazing,
        };
        assert_eq!(done.explanation(), None);
        assert_eq!(done.headline(), "Amazing!");
        assert!(done.to_string().starts_with("90 / 100 points."));
    }

    #[test]
    fn incorrect_is_not_success() {
        let miss = QuizEvent::Incorrect {
            question: 2,
            chosen: 0,
            correct: 2,
            explanation: String::new(),
        };
        assert!(!miss.is_success());
        assert_eq!(miss.headline(), "Not quite right \u{1f60a}");
    }
}
