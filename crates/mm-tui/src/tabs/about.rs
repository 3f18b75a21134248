//! About tab: creator, mission and philosophy.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use mm_core::about;

use super::{Tab, TabAction};

/// About tab state.
#[derive(Debug, Default)]
pub struct AboutTab {
    scroll: u16,
}

impl AboutTab {
    /// Create the about tab scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    fn lines() -> Vec<Line<'static>> {
        let heading = Style::default().fg(Color::Magenta).bold();
        let mut lines = vec![
            Line::from(Span::styled(about::CREATOR, Style::default().bold())).centered(),
            Line::from(Span::styled(
                format!("Creator of {}", about::APP_NAME),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::from(""),
        ];

        for section in about::STORY {
            lines.push(Line::from(Span::styled(section.title, heading)));
            lines.push(Line::from(section.body));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("My Educational Philosophy", heading)));
        for section in about::PHILOSOPHY {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", section.title), Style::default().bold()),
                Span::raw(section.body),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                format!("\"{}\"", about::QUOTE),
                Style::default().italic(),
            ))
            .centered(),
        );
        lines.push(Line::from(format!("- {}", about::QUOTE_AUTHOR)).centered());
        lines
    }
}

impl Tab for AboutTab {
    fn handle_key(&mut self, key: KeyEvent) -> TabAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Esc => return TabAction::Switch(super::TabId::Home),
            _ => {}
        }
        TabAction::None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Self::lines())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title(" About ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            );
        frame.render_widget(paragraph, area);
    }

    fn status_hint(&self) -> &str {
        "j/k:scroll  Esc:home  Tab:next tab  ?:help  q:quit"
    }
}
