//! Quiz tab: one question at a time, then a results screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use mm_core::QuizQuestion;
use mm_quiz::{QuizAction, QuizPhase, QuizSession};

use super::{Tab, TabAction};
use crate::shared::Feedback;

/// Quiz tab state.
pub struct QuizTab {
    session: QuizSession,
    feedback: Feedback,
}

impl QuizTab {
    /// Wrap a ready session.
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            feedback: Feedback::default(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Latest feedback shown under the question.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    fn apply(&mut self, action: QuizAction) {
        self.session.apply_to(action, &mut self.feedback);
    }

    /// Move the selection up or down, starting from the top when nothing is
    /// selected yet.
    fn move_selection(&mut self, down: bool) {
        let Some(question) = self.session.current() else {
            return;
        };
        let last = question.options.len() - 1;
        let next = match (self.session.selected(), down) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(last),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.apply(QuizAction::Choose(next));
    }

    /// Enter submits a chosen answer, or moves on once it is revealed.
    fn confirm(&mut self) {
        match self.session.phase() {
            QuizPhase::Answering => self.apply(QuizAction::Submit),
            QuizPhase::Submitted => {
                self.apply(QuizAction::Advance);
                if !self.session.is_complete() {
                    self.feedback.clear();
                }
            }
            QuizPhase::Completed => {}
        }
    }

    fn draw_question(&self, frame: &mut Frame, area: Rect, question: &QuizQuestion) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(4),
            ])
            .split(area);

        let answered = self.session.index() as f64 / self.session.len().max(1) as f64;
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(
                        " Question {} of {}   Score: {} ",
                        self.session.index() + 1,
                        self.session.len(),
                        self.session.score()
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(answered.clamp(0.0, 1.0));
        frame.render_widget(gauge, rows[0]);

        let revealed = self.session.is_revealed();
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(
                format!("{} {}", question.emoji, question.prompt),
                Style::default().bold(),
            )),
            Line::from(""),
        ];
        for (i, option) in question.options.iter().enumerate() {
            let chosen = self.session.selected() == Some(i);
            let style = if revealed && question.is_correct(i) {
                Style::default().fg(Color::Black).bg(Color::Green).bold()
            } else if revealed && chosen {
                Style::default().fg(Color::Black).bg(Color::Red)
            } else if chosen {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!(" {}) {option} ", QuizQuestion::option_letter(i)),
                style,
            )));
        }
        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, rows[1]);

        self.feedback.draw(frame, rows[2]);
    }

    fn draw_results(&self, frame: &mut Frame, area: Rect) {
        let Some(rating) = self.session.rating() else {
            return;
        };
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(""),
            Line::from(format!("{} Quiz Complete!", rating.emoji()))
                .bold()
                .centered(),
            Line::from(Span::styled(
                rating.star_bar(),
                Style::default().fg(Color::Yellow),
            ))
            .centered(),
            Line::from(rating.label()).centered(),
            Line::from(format!(
                "{} / {} points ({}% correct)",
                self.session.score(),
                self.session.max_score(),
                self.session.percent_correct()
            ))
            .centered(),
            Line::from(""),
        ];

        for (i, review) in self.session.review().enumerate() {
            let (mark, color) = if review.is_correct() {
                ("\u{2713}", Color::Green)
            } else {
                ("\u{2717}", Color::Red)
            };
            let mut spans = vec![
                Span::styled(format!(" {mark} "), Style::default().fg(color).bold()),
                Span::raw(format!("{}. {}  ", i + 1, review.question.prompt)),
                Span::styled(review.chosen_text().to_string(), Style::default().fg(color)),
            ];
            if !review.is_correct() {
                spans.push(Span::styled(
                    format!("  (answer: {})", review.question.correct_text()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from("Press r to try again.").centered());

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Tab for QuizTab {
    fn handle_key(&mut self, key: KeyEvent) -> TabAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Char(c @ 'a'..='d') => {
                self.apply(QuizAction::Choose(c as usize - 'a' as usize));
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.apply(QuizAction::Choose(c as usize - '1' as usize));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.confirm(),
            KeyCode::Char('r') => {
                self.apply(QuizAction::Reset);
                self.feedback.clear();
            }
            _ => {}
        }
        TabAction::None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        match self.session.current() {
            Some(question) => self.draw_question(frame, area, question),
            None => self.draw_results(frame, area),
        }
    }

    fn status_hint(&self) -> &str {
        match self.session.phase() {
            QuizPhase::Answering => "a-d/j/k:choose  Enter:submit  r:restart  ?:help  q:quit",
            QuizPhase::Submitted if self.session.is_last_question() => {
                "Enter:see results  r:restart  ?:help  q:quit"
            }
            QuizPhase::Submitted => "Enter:next question  r:restart  ?:help  q:quit",
            QuizPhase::Completed => "r:try again  Tab:next tab  ?:help  q:quit",
        }
    }
}
