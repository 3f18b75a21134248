//! Tab definitions, trait, and tab bar rendering.

pub mod about;
pub mod home;
pub mod learn;
pub mod quiz;
pub mod sort;

use crossterm::event::KeyEvent;
use ratatui::prelude::*;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Title screen with the activity menu.
    Home,
    /// Element reference browser.
    Learn,
    /// Metal / non-metal sorting game.
    Sort,
    /// Multiple-choice quiz.
    Quiz,
    /// Credits and philosophy.
    About,
}

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 5] = [
        TabId::Home,
        TabId::Learn,
        TabId::Sort,
        TabId::Quiz,
        TabId::About,
    ];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "home" | "menu" => Some(TabId::Home),
            "learn" | "elements" => Some(TabId::Learn),
            "sort" | "play" => Some(TabId::Sort),
            "quiz" => Some(TabId::Quiz),
            "about" | "credits" => Some(TabId::About),
            _ => None,
        }
    }

    /// Label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            TabId::Home => "Home",
            TabId::Learn => "Learn",
            TabId::Sort => "Sort",
            TabId::Quiz => "Quiz",
            TabId::About => "About",
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        let idx = (self.index() + 1) % TabId::ALL.len();
        TabId::ALL[idx]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        let idx = if self.index() == 0 {
            TabId::ALL.len() - 1
        } else {
            self.index() - 1
        };
        TabId::ALL[idx]
    }
}

/// What the app should do after a tab handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabAction {
    /// Nothing beyond the tab's own state change.
    None,
    /// Switch to another tab.
    Switch(TabId),
    /// Quit the application.
    Quit,
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Handle a key event.
    fn handle_key(&mut self, key: KeyEvent) -> TabAction;

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Tab bar label for the tab at `index`, e.g. `[2]Learn`.
fn label(index: usize, tab: TabId) -> String {
    format!("[{}]{}", index + 1, tab.title())
}

const DIVIDER: &str = " | ";

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let active_idx = active.index();
    let mut spans = Vec::new();

    for (i, tab) in TabId::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(DIVIDER, Style::default().fg(Color::DarkGray)));
        }
        let style = if i == active_idx {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label(i, *tab), style));
    }

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Hit-test the tab bar for a click at column `col`.
pub fn tab_bar_hit_test(col: u16) -> Option<TabId> {
    let mut x = 0usize;
    let col = usize::from(col);
    for (i, tab) in TabId::ALL.iter().enumerate() {
        let end = x + label(i, *tab).len();
        if (x..end).contains(&col) {
            return Some(*tab);
        }
        x = end + DIVIDER.len();
    }
    None
}

/// Move a list cursor by one step, clamped to `len`.
pub(crate) fn step(cursor: usize, len: usize, down: bool) -> usize {
    if len == 0 {
        0
    } else if down {
        (cursor + 1).min(len - 1)
    } else {
        cursor.saturating_sub(1)
    }
}
