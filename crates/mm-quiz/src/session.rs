//! Quiz session state and transitions.
//!
//! Each question moves through `Answering -> Submitted`; advancing from the
//! last submitted question completes the quiz. The answer history grows by
//! exactly one entry per submission and is never rewritten.

use mm_core::question::validate_questions;
use mm_core::{ContentResult, EventSink, POINTS_PER_CORRECT, QuizQuestion};

use crate::action::QuizAction;
use crate::event::QuizEvent;
use crate::rating::Rating;
use crate::review::AnswerReview;

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// The current question is open; options may be (re)chosen.
    Answering,
    /// The current answer is locked and the explanation revealed.
    Submitted,
    /// Every question has been answered. Only a reset leaves this phase.
    Completed,
}

/// An interactive quiz session.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    revealed: bool,
    score: u32,
    history: Vec<usize>,
}

impl QuizSession {
    /// Create a session over `questions`, asked in the given order.
    pub fn new(questions: Vec<QuizQuestion>) -> ContentResult<Self> {
        validate_questions(&questions)?;
        tracing::debug!(questions = questions.len(), "quiz session created");
        Ok(Self {
            questions,
            index: 0,
            selected: None,
            revealed: false,
            score: 0,
            history: Vec::new(),
        })
    }

    /// All questions, in order.
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// The question being asked, or `None` once the quiz is complete.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// Zero-based position of the current question. Equals the question
    /// count once complete.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; sessions are never built without questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The option currently chosen for this question.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the current answer has been submitted and revealed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score for answering every question correctly.
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.questions.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(POINTS_PER_CORRECT)
    }

    /// Submitted option indices, one per answered question.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Current phase.
    pub fn phase(&self) -> QuizPhase {
        if self.index >= self.questions.len() {
            QuizPhase::Completed
        } else if self.revealed {
            QuizPhase::Submitted
        } else {
            QuizPhase::Answering
        }
    }

    /// Whether every question has been answered and advanced past.
    pub fn is_complete(&self) -> bool {
        self.phase() == QuizPhase::Completed
    }

    /// Whether the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Score as a whole percentage of the maximum, rounded half up.
    pub fn percent_correct(&self) -> u32 {
        let max = u64::from(self.max_score());
        if max == 0 {
            return 0;
        }
        let percent = (u64::from(self.score) * 100 + max / 2) / max;
        u32::try_from(percent).unwrap_or(100)
    }

    /// The final rating, once complete.
    pub fn rating(&self) -> Option<Rating> {
        self.is_complete()
            .then(|| Rating::from_score(self.score, self.questions.len()))
    }

    /// Every submitted answer paired with its question.
    pub fn review(&self) -> impl Iterator<Item = AnswerReview<'_>> {
        self.history
            .iter()
            .zip(&self.questions)
            .map(|(&chosen, question)| AnswerReview { question, chosen })
    }

    /// Choose an option for the current question.
    ///
    /// Overwrites an earlier choice. Ignored once the answer is revealed,
    /// after completion, or when `option` is not one of the question's
    /// options. Returns whether the choice was taken.
    pub fn choose(&mut self, option: usize) -> bool {
        if self.revealed {
            tracing::trace!(option, "choose ignored: answer locked");
            return false;
        }
        let Some(question) = self.current() else {
            tracing::trace!(option, "choose ignored: quiz complete");
            return false;
        };
        if option >= question.options.len() {
            tracing::trace!(option, "choose ignored: no such option");
            return false;
        }
        self.selected = Some(option);
        true
    }

    /// Lock in the chosen option, score it and reveal the explanation.
    ///
    /// Ignored without a choice or when already revealed.
    pub fn submit(&mut self) -> Vec<QuizEvent> {
        if self.revealed {
            tracing::trace!("submit ignored: already revealed");
            return Vec::new();
        }
        let Some(chosen) = self.selected else {
            tracing::trace!("submit ignored: nothing chosen");
            return Vec::new();
        };
        let Some(question) = self.questions.get(self.index) else {
            return Vec::new();
        };

        let event = if question.is_correct(chosen) {
            QuizEvent::Correct {
                question: question.id,
                option: chosen,
                explanation: question.explanation.clone(),
            }
        } else {
            QuizEvent::Incorrect {
                question: question.id,
                chosen,
                correct: question.correct,
                explanation: question.explanation.clone(),
            }
        };

        if event.is_success() {
            self.score = self.score.saturating_add(POINTS_PER_CORRECT);
        }
        self.history.push(chosen);
        self.revealed = true;
        tracing::debug!(
            question = question.id,
            chosen,
            correct = event.is_success(),
            score = self.score,
            "answer submitted"
        );
        vec![event]
    }

    /// Move past a revealed answer.
    ///
    /// On the last question this completes the quiz and emits the final
    /// score and rating. Ignored unless the current answer is revealed.
    pub fn advance(&mut self) -> Vec<QuizEvent> {
        if !self.revealed {
            tracing::trace!("advance ignored: answer not revealed");
            return Vec::new();
        }

        self.selected = None;
        self.revealed = false;

        if self.is_last_question() {
            self.index = self.questions.len();
            let rating = Rating::from_score(self.score, self.questions.len());
            tracing::debug!(score = self.score, tier = rating.tier(), "quiz complete");
            return vec![QuizEvent::Completed {
                score: self.score,
                max_score: self.max_score(),
                rating,
            }];
        }

        self.index += 1;
        tracing::debug!(index = self.index, "next question");
        Vec::new()
    }

    /// Start over from the first question.
    pub fn reset(&mut self) {
        self.index = 0;
        self.selected = None;
        self.revealed = false;
        self.score = 0;
        self.history.clear();
        tracing::debug!("quiz session reset");
    }

    /// Apply one action and return the events it produced.
    pub fn apply(&mut self, action: QuizAction) -> Vec<QuizEvent> {
        match action {
            QuizAction::Choose(option) => {
                self.choose(option);
                Vec::new()
            }
            QuizAction::Submit => self.submit(),
            QuizAction::Advance => self.advance(),
            QuizAction::Reset => {
                self.reset();
                Vec::new()
            }
        }
    }

    /// Apply one action and forward its events to `sink`.
    pub fn apply_to<S: EventSink<QuizEvent>>(&mut self, action: QuizAction, sink: &mut S) {
        for event in self.apply(action) {
            sink.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use mm_core::ContentPack;

    use super::*;

    fn single() -> QuizSession {
        QuizSession::new(vec![QuizQuestion {
            id: 1,
            prompt: "Which of these is a metal?".into(),
            options: vec!["Oxygen".into(), "Gold".into()],
            correct: 1,
            explanation: "Gold is a metal.".into(),
            emoji: String::new(),
        }])
        .unwrap()
    }

    fn builtin() -> QuizSession {
        QuizSession::new(ContentPack::builtin().questions).unwrap()
    }

    #[test]
    fn single_question_walkthrough() {
        let mut q = single();
        assert!(q.choose(1));
        let events = q.submit();
        assert!(q.is_revealed());
        assert_eq!(q.score(), 10);
        assert_eq!(q.history(), &[1]);
        assert!(matches!(events.as_slice(), [QuizEvent::Correct { option: 1, .. }]));

        let events = q.advance();
        assert_eq!(q.phase(), QuizPhase::Completed);
        assert_eq!(
            events,
            vec![QuizEvent::Completed {
                score: 10,
                max_score: 10,
                rating: Rating::Amazing
            }]
        );
        assert_eq!(q.rating().map(Rating::tier), Some(5));
        assert_eq!(q.rating().map(Rating::label), Some("Amazing!"));
    }

    #[test]
    fn wrong_answer_reports_correct_option() {
        let mut q = single();
        q.choose(0);
        let events = q.submit();
        assert_eq!(q.score(), 0);
        match events.as_slice() {
            [QuizEvent::Incorrect {
                chosen,
                correct,
                explanation,
                ..
            }] => {
                assert_eq!(*chosen, 0);
                assert_eq!(*correct, 1);
                assert_eq!(explanation, "Gold is a metal.");
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn rechoosing_before_submit_overwrites() {
        let mut q = single();
        q.choose(0);
        q.choose(1);
        assert_eq!(q.selected(), Some(1));
        q.submit();
        assert_eq!(q.history(), &[1]);
    }

    #[test]
    fn submit_without_choice_is_noop() {
        let mut q = single();
        assert!(q.submit().is_empty());
        assert!(!q.is_revealed());
        assert!(q.history().is_empty());
    }

    #[test]
    fn choice_locked_after_submit() {
        let mut q = single();
        q.choose(0);
        q.submit();
        assert!(!q.choose(1));
        assert_eq!(q.selected(), Some(0));
        assert!(q.submit().is_empty());
        assert_eq!(q.history().len(), 1);
    }

    #[test]
    fn out_of_range_option_ignored() {
        let mut q = single();
        assert!(!q.choose(2));
        assert_eq!(q.selected(), None);
    }

    #[test]
    fn advance_before_reveal_is_noop() {
        let mut q = builtin();
        q.choose(1);
        assert!(q.advance().is_empty());
        assert_eq!(q.index(), 0);
        assert_eq!(q.selected(), Some(1));
        assert_eq!(q.phase(), QuizPhase::Answering);
    }

    #[test]
    fn advance_clears_selection_for_next_question() {
        let mut q = builtin();
        q.choose(1);
        q.submit();
        assert_eq!(q.phase(), QuizPhase::Submitted);
        assert!(q.advance().is_empty());
        assert_eq!(q.index(), 1);
        assert_eq!(q.selected(), None);
        assert!(!q.is_revealed());
        assert_eq!(q.current().map(|c| c.id), Some(2));
    }

    #[test]
    fn all_correct_rates_amazing() {
        let mut q = builtin();
        let mut sink = Vec::new();
        while let Some(correct) = q.current().map(|c| c.correct) {
            q.apply_to(QuizAction::Choose(correct), &mut sink);
            q.apply_to(QuizAction::Submit, &mut sink);
            q.apply_to(QuizAction::Advance, &mut sink);
        }
        assert_eq!(q.score(), 100);
        assert_eq!(q.percent_correct(), 100);
        assert_eq!(q.rating(), Some(Rating::Amazing));
        assert_eq!(sink.len(), 11);
        assert!(matches!(sink.last(), Some(QuizEvent::Completed { score: 100, .. })));
    }

    #[test]
    fn all_wrong_rates_keep_learning() {
        let mut q = builtin();
        while let Some(wrong) = q.current().map(|c| (c.correct + 1) % c.options.len()) {
            q.choose(wrong);
            q.submit();
            q.advance();
        }
        assert_eq!(q.score(), 0);
        assert_eq!(q.rating().map(Rating::tier), Some(1));
        assert!(q.review().all(|r| !r.is_correct()));
    }

    #[test]
    fn completed_quiz_ignores_everything_but_reset() {
        let mut q = single();
        q.choose(1);
        q.submit();
        q.advance();

        assert!(!q.choose(0));
        assert!(q.submit().is_empty());
        assert!(q.advance().is_empty());
        assert_eq!(q.index(), 1);
        assert_eq!(q.history(), &[1]);

        q.apply(QuizAction::Reset);
        assert_eq!(q.phase(), QuizPhase::Answering);
        assert_eq!(q.index(), 0);
        assert_eq!(q.score(), 0);
        assert!(q.history().is_empty());
        assert_eq!(q.rating(), None);
    }

    #[test]
    fn percent_rounds_like_results_screen() {
        let questions: Vec<QuizQuestion> = ContentPack::builtin().questions.into_iter().take(3).collect();
        let mut q = QuizSession::new(questions).unwrap();
        for pick_correct in [true, true, false] {
            let c = q.current().map(|c| c.correct).unwrap();
            q.choose(if pick_correct { c } else { (c + 1) % 4 });
            q.submit();
            q.advance();
        }
        assert_eq!(q.percent_correct(), 67);
        assert_eq!(q.rating(), Some(Rating::Good));
    }

    #[test]
    fn review_pairs_history_with_questions() {
        let mut q = builtin();
        q.choose(0);
        q.submit();
        q.advance();
        q.choose(2);
        q.submit();

        let review: Vec<_> = q.review().collect();
        assert_eq!(review.len(), 2);
        assert_eq!(review[0].question.id, 1);
        assert_eq!(review[0].chosen_text(), "Oxygen");
        assert!(!review[0].is_correct());
        assert!(review[1].is_correct());
    }

    #[test]
    fn empty_quiz_rejected() {
        assert!(QuizSession::new(Vec::new()).is_err());
    }
}
