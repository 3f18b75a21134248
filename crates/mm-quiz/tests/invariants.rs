//! Property tests over random action sequences.

use proptest::prelude::*;

use mm_core::ContentPack;
use mm_quiz::{QuizAction, QuizEvent, QuizPhase, QuizSession, Rating};

fn arb_action() -> impl Strategy<Value = QuizAction> {
    prop_oneof![
        4 => (0usize..5).prop_map(QuizAction::Choose),
        3 => Just(QuizAction::Submit),
        3 => Just(QuizAction::Advance),
        1 => Just(QuizAction::Reset),
    ]
}

fn session() -> QuizSession {
    QuizSession::new(ContentPack::builtin().questions).unwrap()
}

proptest! {
    #[test]
    fn history_length_follows_index(actions in prop::collection::vec(arb_action(), 0..120)) {
        let mut quiz = session();
        for action in actions {
            quiz.apply(action);
            let expected = if quiz.is_revealed() { quiz.index() + 1 } else { quiz.index() };
            prop_assert_eq!(quiz.history().len(), expected);
            prop_assert!(quiz.index() <= quiz.len());
        }
    }

    #[test]
    fn submit_appends_once_and_scores_iff_correct(actions in prop::collection::vec(arb_action(), 0..120)) {
        let mut quiz = session();
        for action in actions {
            let before_len = quiz.history().len();
            let before_score = quiz.score();
            let correct_index = quiz.current().map(|q| q.correct);
            let selected = quiz.selected();
            let events = quiz.apply(action);

            let answered = events.iter().any(|e| !matches!(e, QuizEvent::Completed { .. }));
            if answered {
                prop_assert_eq!(action, QuizAction::Submit);
                prop_assert_eq!(quiz.history().len(), before_len + 1);
                prop_assert_eq!(quiz.history().last().copied(), selected);
                let gained = quiz.score() - before_score;
                prop_assert_eq!(gained == 10, selected == correct_index);
                prop_assert!(gained == 0 || gained == 10);
            } else if action != QuizAction::Reset {
                prop_assert_eq!(quiz.history().len(), before_len);
                prop_assert_eq!(quiz.score(), before_score);
            }
        }
    }

    #[test]
    fn history_is_never_rewritten(actions in prop::collection::vec(arb_action(), 0..120)) {
        let mut quiz = session();
        let mut previous: Vec<usize> = Vec::new();
        for action in actions {
            quiz.apply(action);
            if action == QuizAction::Reset {
                prop_assert!(quiz.history().is_empty());
            } else {
                prop_assert!(quiz.history().starts_with(&previous));
            }
            previous = quiz.history().to_vec();
        }
    }

    #[test]
    fn advance_before_reveal_changes_nothing(prefix in prop::collection::vec(arb_action(), 0..60)) {
        let mut quiz = session();
        for action in prefix {
            quiz.apply(action);
        }
        if !quiz.is_revealed() {
            let index = quiz.index();
            let selected = quiz.selected();
            let score = quiz.score();
            let phase = quiz.phase();
            prop_assert!(quiz.advance().is_empty());
            prop_assert_eq!(quiz.index(), index);
            prop_assert_eq!(quiz.selected(), selected);
            prop_assert_eq!(quiz.score(), score);
            prop_assert_eq!(quiz.phase(), phase);
        }
    }

    #[test]
    fn completion_event_matches_final_state(actions in prop::collection::vec(arb_action(), 0..200)) {
        let mut quiz = session();
        for action in actions {
            for event in quiz.apply(action) {
                if let QuizEvent::Completed { score, max_score, rating } = event {
                    prop_assert_eq!(quiz.phase(), QuizPhase::Completed);
                    prop_assert_eq!(score, quiz.score());
                    prop_assert_eq!(max_score, 100);
                    prop_assert_eq!(rating, Rating::from_score(score, 10));
                    prop_assert_eq!(quiz.history().len(), 10);
                }
            }
        }
    }

    #[test]
    fn rating_is_monotonic_in_score(a in 0u32..=10, b in 0u32..=10) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Rating::from_score(lo * 10, 10) <= Rating::from_score(hi * 10, 10));
    }
}
