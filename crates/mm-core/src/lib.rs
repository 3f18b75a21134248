//! Core types for MetalMind: the metal / non-metal content model.
//!
//! This crate defines the read-only content the learning activities are
//! built on (reference elements, sorting items and quiz questions), the
//! built-in content pack, and the [`EventSink`] seam through which the
//! session engines report feedback. It holds no session state of its own.

/// Home and about screen texts.
pub mod about;
/// Metal / non-metal classification.
pub mod category;
/// Content packs and the built-in content tables.
pub mod content;
/// Reference elements shown by the learn browser.
pub mod element;
/// Error types used throughout the crate.
pub mod error;
/// Items for the sorting activity.
pub mod item;
/// Multiple-choice quiz questions.
pub mod question;
/// Output sink for engine feedback events.
pub mod sink;

/// Points awarded for every correct decision in either activity.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Re-export the classification type.
pub use category::Category;
/// Re-export content pack types.
pub use content::ContentPack;
/// Re-export the element type.
pub use element::Element;
/// Re-export error types.
pub use error::{ContentError, ContentResult};
/// Re-export the sorting item type.
pub use item::ClassificationItem;
/// Re-export the question type.
pub use question::QuizQuestion;
/// Re-export the sink trait.
pub use sink::EventSink;
