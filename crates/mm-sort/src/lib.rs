//! Sorting game engine for MetalMind.
//!
//! A [`SortSession`] holds a pool of everyday items and two bins, one per
//! [`Category`](mm_core::Category). The learner picks an item and drops it into
//! a bin; correct drops move the item and score points, wrong drops are
//! rejected and leave the item in the pool. The session finishes when the
//! pool is empty.
//!
//! Every action is total: an action whose precondition does not hold is a
//! no-op and emits nothing.

pub mod action;
pub mod config;
pub mod event;
pub mod progress;
pub mod session;

pub use action::SortAction;
pub use config::SortConfig;
pub use event::SortEvent;
pub use progress::Progress;
pub use session::{SortPhase, SortSession};
