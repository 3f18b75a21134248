//! Terminal UI for MetalMind.
//!
//! Provides a ratatui-based interface with tabs for the home menu, the
//! element reference, the sorting game, the quiz and the about page.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
