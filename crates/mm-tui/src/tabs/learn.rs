//! Learn tab: element list with a detail card.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use mm_core::{Category, Element};

use super::{Tab, TabAction, step};

/// Learn tab state.
pub struct LearnTab {
    elements: Vec<Element>,
    filter: Option<Category>,
    cursor: usize,
}

impl LearnTab {
    /// Create the browser over a list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            filter: None,
            cursor: 0,
        }
    }

    /// Elements passing the current filter, metals first.
    fn visible(&self) -> Vec<&Element> {
        Category::ALL
            .iter()
            .filter(|c| self.filter.is_none_or(|f| f == **c))
            .flat_map(|c| self.elements.iter().filter(move |e| e.category == *c))
            .collect()
    }

    /// The highlighted element.
    pub fn selected(&self) -> Option<&Element> {
        self.visible().get(self.cursor).copied()
    }

    /// Current category filter.
    pub fn filter(&self) -> Option<Category> {
        self.filter
    }

    fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Category::Metal),
            Some(Category::Metal) => Some(Category::NonMetal),
            Some(Category::NonMetal) => None,
        };
        self.cursor = 0;
    }

    fn draw_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let Some(element) = self.selected() else {
            frame.render_widget(Paragraph::new("No elements.").block(block), area);
            return;
        };

        let color = category_color(element.category);
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} {}", element.emoji, element.name),
                    Style::default().fg(color).bold(),
                ),
                Span::styled(
                    format!("  [{}]", element.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(""),
            Line::from(element.description.clone()),
            Line::from(""),
        ];

        if !element.properties.is_empty() {
            lines.push(Line::from(Span::styled(
                "Properties",
                Style::default().bold(),
            )));
            for property in &element.properties {
                lines.push(Line::from(format!("  \u{2022} {property}")));
            }
            lines.push(Line::from(""));
        }

        if !element.fun_fact.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Fun fact: ", Style::default().fg(Color::Yellow).bold()),
                Span::raw(element.fun_fact.clone()),
            ]));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block.title(format!(" {} ", element.name)));
        frame.render_widget(paragraph, area);
    }
}

/// Accent color for a category.
pub(crate) fn category_color(category: Category) -> Color {
    match category {
        Category::Metal => Color::LightYellow,
        Category::NonMetal => Color::LightCyan,
    }
}

impl Tab for LearnTab {
    fn handle_key(&mut self, key: KeyEvent) -> TabAction {
        let len = self.visible().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.cursor = step(self.cursor, len, true),
            KeyCode::Up | KeyCode::Char('k') => self.cursor = step(self.cursor, len, false),
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = len.saturating_sub(1),
            KeyCode::Char('f') => self.cycle_filter(),
            _ => {}
        }
        TabAction::None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        let items: Vec<ListItem> = self
            .visible()
            .into_iter()
            .map(|e| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", e.emoji)),
                    Span::styled(e.name.clone(), Style::default().fg(category_color(e.category))),
                ]))
            })
            .collect();

        let title = match self.filter {
            None => " Elements ".to_string(),
            Some(c) => format!(" {} {} ", c.badge(), c.plural()),
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).bold())
            .highlight_symbol("\u{25b6} ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, chunks[0], &mut state);

        self.draw_card(frame, chunks[1]);
    }

    fn status_hint(&self) -> &str {
        "j/k:move  g/G:top/bottom  f:filter metals/non-metals  Tab:next tab  ?:help  q:quit"
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use mm_core::ContentPack;

    use super::*;

    fn press(tab: &mut LearnTab, code: KeyCode) {
        tab.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn metals_are_listed_first() {
        let tab = LearnTab::new(ContentPack::builtin().elements);
        let visible = tab.visible();
        assert_eq!(visible.len(), 6);
        assert_eq!(visible[0].category, Category::Metal);
        assert_eq!(visible[5].category, Category::NonMetal);
    }

    #[test]
    fn filter_cycles_and_resets_cursor() {
        let mut tab = LearnTab::new(ContentPack::builtin().elements);
        press(&mut tab, KeyCode::Char('G'));
        press(&mut tab, KeyCode::Char('f'));
        assert_eq!(tab.filter(), Some(Category::Metal));
        assert_eq!(tab.selected().unwrap().id, "gold");

        press(&mut tab, KeyCode::Char('f'));
        assert!(tab.visible().iter().all(|e| e.category == Category::NonMetal));

        press(&mut tab, KeyCode::Char('f'));
        assert_eq!(tab.filter(), None);
    }

    #[test]
    fn empty_browser_has_no_selection() {
        let mut tab = LearnTab::new(Vec::new());
        press(&mut tab, KeyCode::Down);
        assert!(tab.selected().is_none());
    }
}
