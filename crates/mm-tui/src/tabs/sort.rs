//! Sort tab: pick up items and drop them into the right box.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph};

use mm_core::{Category, ClassificationItem};
use mm_sort::{SortAction, SortSession};

use super::learn::category_color;
use super::{Tab, TabAction, step};
use crate::shared::Feedback;

/// Sort tab state.
pub struct SortTab {
    session: SortSession,
    feedback: Feedback,
    cursor: usize,
}

impl SortTab {
    /// Wrap a ready session.
    pub fn new(session: SortSession) -> Self {
        Self {
            session,
            feedback: Feedback::default(),
            cursor: 0,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &SortSession {
        &self.session
    }

    /// Latest feedback shown under the game.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    fn apply(&mut self, action: SortAction) {
        self.session.apply_to(action, &mut self.feedback);
        self.cursor = self.cursor.min(self.session.pool().len().saturating_sub(1));
    }

    fn pick_highlighted(&mut self) {
        if let Some(item) = self.session.pool().get(self.cursor) {
            let id = item.id.clone();
            self.apply(SortAction::Select(id));
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let progress = self.session.progress();
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(
                        " Score: {} / {} ",
                        self.session.score(),
                        self.session.max_score()
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(progress.fraction())
            .label(format!("Sorted {progress}"));
        frame.render_widget(gauge, area);
    }

    fn draw_pool(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Items to sort ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        if self.session.is_finished() {
            let lines = vec![
                Line::from(""),
                Line::from("\u{1f3c6} All sorted!").bold().centered(),
                Line::from("Press r to play again.").centered(),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
            return;
        }

        let pending = self.session.pending().map(|i| i.id.as_str());
        let items: Vec<ListItem> = self
            .session
            .pool()
            .iter()
            .map(|item| {
                let held = pending == Some(item.id.as_str());
                let style = if held {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default()
                };
                let hand = if held { "  \u{270b}" } else { "" };
                ListItem::new(Line::from(Span::styled(format!("{item}{hand}"), style)))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("\u{25b6} ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_bin(&self, frame: &mut Frame, area: Rect, bin: Category) {
        let color = category_color(bin);
        let key = match bin {
            Category::Metal => "m",
            Category::NonMetal => "n",
        };
        let items: Vec<ListItem> = self
            .session
            .bin(bin)
            .iter()
            .map(|item: &ClassificationItem| ListItem::new(item.to_string()))
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(format!(" {} {} [{key}] ", bin.badge(), bin.plural()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(list, area);
    }
}

impl Tab for SortTab {
    fn handle_key(&mut self, key: KeyEvent) -> TabAction {
        let len = self.session.pool().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.cursor = step(self.cursor, len, true),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = step(self.cursor, len, false),
            KeyCode::Enter | KeyCode::Char(' ') => self.pick_highlighted(),
            KeyCode::Left | KeyCode::Char('m') => self.apply(SortAction::DropInto(Category::Metal)),
            KeyCode::Right | KeyCode::Char('n') => {
                self.apply(SortAction::DropInto(Category::NonMetal));
            }
            KeyCode::Char('r') => {
                self.apply(SortAction::Reset);
                self.feedback.clear();
                self.cursor = 0;
            }
            _ => {}
        }
        TabAction::None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);

        self.draw_header(frame, rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ])
            .split(rows[1]);
        self.draw_pool(frame, columns[0]);
        self.draw_bin(frame, columns[1], Category::Metal);
        self.draw_bin(frame, columns[2], Category::NonMetal);

        self.feedback.draw(frame, rows[2]);
    }

    fn status_hint(&self) -> &str {
        if self.session.is_finished() {
            "r:play again  Tab:next tab  ?:help  q:quit"
        } else if self.session.pending().is_some() {
            "m/\u{2190}:Metals  n/\u{2192}:Non-Metals  j/k:move  Enter:pick another  r:reset  ?:help"
        } else {
            "j/k:move  Enter/Space:pick up  r:reset  Tab:next tab  ?:help  q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use mm_core::ContentPack;

    use super::*;
    use crate::shared::OutputStyle;

    fn tab() -> SortTab {
        SortTab::new(SortSession::new(ContentPack::builtin().sort_items).unwrap())
    }

    fn press(tab: &mut SortTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn pick_and_drop_scores() {
        let mut tab = tab();
        // First built-in item is the gold ring.
        press(&mut tab, KeyCode::Enter);
        assert_eq!(tab.session().pending().unwrap().id, "gold");
        press(&mut tab, KeyCode::Char('m'));

        assert_eq!(tab.session().score(), 10);
        assert_eq!(tab.session().pool().len(), 5);
        assert_eq!(tab.feedback().latest().unwrap().style, OutputStyle::Success);
    }

    #[test]
    fn wrong_box_gives_warning() {
        let mut tab = tab();
        press(&mut tab, KeyCode::Enter);
        press(&mut tab, KeyCode::Right);

        assert_eq!(tab.session().score(), 0);
        assert_eq!(tab.session().pool().len(), 6);
        let line = tab.feedback().latest().unwrap();
        assert_eq!(line.style, OutputStyle::Warning);
        assert!(line.text.contains("Non-Metals"));
    }

    #[test]
    fn drop_without_pick_is_silent() {
        let mut tab = tab();
        press(&mut tab, KeyCode::Char('n'));
        assert!(tab.feedback().latest().is_none());
        assert_eq!(tab.session().progress().placed, 0);
    }

    #[test]
    fn cursor_follows_shrinking_pool() {
        let mut tab = tab();
        for _ in 0..10 {
            press(&mut tab, KeyCode::Down);
        }
        // Last built-in item is sulfur powder, a non-metal.
        press(&mut tab, KeyCode::Enter);
        press(&mut tab, KeyCode::Char('n'));
        assert_eq!(tab.session().pool().len(), 5);
        assert_eq!(tab.cursor, 4);
    }

    #[test]
    fn reset_clears_feedback() {
        let mut tab = tab();
        press(&mut tab, KeyCode::Enter);
        press(&mut tab, KeyCode::Char('m'));
        press(&mut tab, KeyCode::Char('r'));
        assert!(tab.feedback().latest().is_none());
        assert_eq!(tab.session().score(), 0);
    }
}
