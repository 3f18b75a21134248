//! Home tab: title screen and activity menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mm_core::about;

use super::{Tab, TabAction, TabId, step};

/// Tabs reachable from the menu, parallel to [`about::ACTIVITIES`].
const TARGETS: [TabId; 4] = [TabId::Learn, TabId::Sort, TabId::Quiz, TabId::About];

/// Home tab state.
#[derive(Debug, Default)]
pub struct HomeTab {
    cursor: usize,
}

impl HomeTab {
    /// Create the home tab with the first activity highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The highlighted menu target.
    pub fn selected(&self) -> TabId {
        TARGETS[self.cursor]
    }
}

impl Tab for HomeTab {
    fn handle_key(&mut self, key: KeyEvent) -> TabAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = step(self.cursor, TARGETS.len(), true);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = step(self.cursor, TARGETS.len(), false);
            }
            KeyCode::Enter | KeyCode::Char(' ') => return TabAction::Switch(self.selected()),
            KeyCode::Esc => return TabAction::Quit,
            _ => {}
        }
        TabAction::None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", about::APP_NAME))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line<'static>> = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("\u{1f9ea} {} \u{2728}", about::APP_NAME),
                Style::default().fg(Color::Cyan).bold(),
            ))
            .centered(),
            Line::from(about::TAGLINE).centered(),
            Line::from(Span::styled(about::AUDIENCE, Style::default().fg(Color::DarkGray)))
                .centered(),
            Line::from(""),
        ];

        for (i, (title, description)) in about::ACTIVITIES.iter().enumerate() {
            let (marker, style) = if i == self.cursor {
                ("\u{25b6} ", Style::default().fg(Color::Black).bg(Color::Cyan).bold())
            } else {
                ("  ", Style::default().fg(Color::White))
            };
            lines.push(
                Line::from(vec![
                    Span::styled(format!("{marker}{title:<8}"), style),
                    Span::styled(format!("  {description}"), Style::default().fg(Color::Gray)),
                ])
                .centered(),
            );
        }

        lines.push(Line::from(""));
        lines.push(Line::from(about::WELCOME).centered());
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                format!("\u{1f4a1} {}", about::DID_YOU_KNOW),
                Style::default().fg(Color::Yellow),
            ))
            .centered(),
        );

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn status_hint(&self) -> &str {
        "j/k:move  Enter:open  1-5/Tab:switch tab  ?:help  q/Esc:quit"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(tab: &mut HomeTab, code: KeyCode) -> TabAction {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_opens_highlighted_activity() {
        let mut home = HomeTab::new();
        assert_eq!(press(&mut home, KeyCode::Enter), TabAction::Switch(TabId::Learn));

        press(&mut home, KeyCode::Char('j'));
        press(&mut home, KeyCode::Char('j'));
        assert_eq!(press(&mut home, KeyCode::Enter), TabAction::Switch(TabId::Quiz));
        assert_eq!(press(&mut home, KeyCode::Esc), TabAction::Quit);
    }

    #[test]
    fn cursor_stays_in_menu() {
        let mut home = HomeTab::new();
        press(&mut home, KeyCode::Up);
        assert_eq!(home.selected(), TabId::Learn);
        for _ in 0..10 {
            press(&mut home, KeyCode::Down);
        }
        assert_eq!(home.selected(), TabId::About);
    }
}
