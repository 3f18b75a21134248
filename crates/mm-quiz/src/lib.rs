//! Multiple-choice quiz engine for MetalMind.
//!
//! A [`QuizSession`] walks a fixed list of questions. For each question the
//! learner chooses an option, submits it (which locks the choice and reveals
//! the explanation), then advances. After the last question the session is
//! complete and carries a [`Rating`] derived from the final score.

pub mod action;
pub mod event;
pub mod rating;
pub mod review;
pub mod session;

pub use action::QuizAction;
pub use event::QuizEvent;
pub use rating::Rating;
pub use review::AnswerReview;
pub use session::{QuizPhase, QuizSession};
