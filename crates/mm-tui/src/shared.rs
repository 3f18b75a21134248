//! Shared utilities for TUI views: feedback sink, layout helpers, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use mm_core::EventSink;
use mm_quiz::QuizEvent;
use mm_sort::SortEvent;

/// Visual style for a feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Positive feedback (green).
    Success,
    /// A wrong answer (yellow).
    Warning,
    /// End-of-activity message (magenta).
    Celebration,
}

impl OutputStyle {
    /// Foreground color for this style.
    pub fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Celebration => Color::Magenta,
        }
    }
}

/// A single feedback message as shown under an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Visual style of this line.
    pub style: OutputStyle,
    /// Short title, e.g. "Correct!".
    pub headline: String,
    /// The message itself.
    pub text: String,
    /// Extra detail such as a quiz explanation.
    pub detail: Option<String>,
}

/// Event sink that keeps the most recent feedback for display.
#[derive(Debug, Default)]
pub struct Feedback {
    latest: Option<OutputLine>,
}

impl Feedback {
    /// The feedback to show, if any.
    pub fn latest(&self) -> Option<&OutputLine> {
        self.latest.as_ref()
    }

    /// Forget the current message.
    pub fn clear(&mut self) {
        self.latest = None;
    }

    /// Render the latest message into `area`.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let Some(line) = &self.latest else {
            return;
        };
        let color = line.style.color();
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", line.headline), Style::default().fg(color).bold()),
            Span::styled(line.text.clone(), Style::default().fg(color)),
        ])];
        if let Some(detail) = &line.detail {
            lines.push(Line::from(Span::styled(
                detail.clone(),
                Style::default().fg(Color::Gray),
            )));
        }
        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(color)));
        frame.render_widget(paragraph, area);
    }
}

impl EventSink<SortEvent> for Feedback {
    fn emit(&mut self, event: SortEvent) {
        let style = match event {
            SortEvent::Correct { .. } => OutputStyle::Success,
            SortEvent::Incorrect { .. } => OutputStyle::Warning,
            SortEvent::Completed { .. } => OutputStyle::Celebration,
        };
        self.latest = Some(OutputLine {
            style,
            headline: event.headline().to_string(),
            text: event.to_string(),
            detail: None,
        });
    }
}

impl EventSink<QuizEvent> for Feedback {
    fn emit(&mut self, event: QuizEvent) {
        let style = match event {
            QuizEvent::Correct { .. } => OutputStyle::Success,
            QuizEvent::Incorrect { .. } => OutputStyle::Warning,
            QuizEvent::Completed { .. } => OutputStyle::Celebration,
        };
        self.latest = Some(OutputLine {
            style,
            headline: event.headline().to_string(),
            text: event.to_string(),
            detail: event.explanation().map(str::to_string),
        });
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Tabs:"),
        Line::from("  1-5 / Tab   Switch tab (Tab only on Quiz)"),
        Line::from("  Shift+Tab   Previous tab"),
        Line::from(""),
        Line::from("Home / Learn / About:"),
        Line::from("  j / k       Move down / up"),
        Line::from("  Enter       Open (home)"),
        Line::from("  f           Filter by category (learn)"),
        Line::from(""),
        Line::from("Sort:"),
        Line::from("  j / k       Move through the items"),
        Line::from("  Enter       Pick up the highlighted item"),
        Line::from("  m / \u{2190}       Drop into Metals"),
        Line::from("  n / \u{2192}       Drop into Non-Metals"),
        Line::from("  r           Reset"),
        Line::from(""),
        Line::from("Quiz:"),
        Line::from("  a-d / j / k Choose an answer"),
        Line::from("  Enter       Submit, then next question"),
        Line::from("  r           Start over"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
