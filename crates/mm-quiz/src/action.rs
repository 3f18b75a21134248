//! Learner actions understood by the quiz engine.

/// One discrete learner action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Pick an option of the current question (0-based).
    Choose(usize),
    /// Lock in the chosen option and reveal the answer.
    Submit,
    /// Move on after the answer was revealed.
    Advance,
    /// Start the quiz over.
    Reset,
}
