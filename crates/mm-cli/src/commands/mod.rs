pub mod about;
pub mod content;
pub mod learn;
pub mod quiz;
pub mod sort;
pub mod tui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use mm_core::{ContentPack, EventSink};
use mm_quiz::QuizEvent;
use mm_sort::SortEvent;

/// Load the pack at `path`, or the built-in pack when no path is given.
fn load_pack(path: Option<&Path>) -> Result<ContentPack, String> {
    ContentPack::load(path).map_err(|e| match path {
        Some(p) => format!("invalid content pack {}: {e}", p.display()),
        None => e.to_string(),
    })
}

/// Event sink that renders engine feedback as colored lines.
///
/// The first write failure is kept and reported by [`ConsoleSink::finish`];
/// later events are dropped.
pub struct ConsoleSink<W: Write> {
    out: W,
    failed: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: None }
    }

    /// Write a plain line through the sink's writer.
    pub fn line(&mut self, text: impl std::fmt::Display) {
        if self.failed.is_none()
            && let Err(e) = writeln!(self.out, "{text}")
        {
            self.failed = Some(e);
        }
    }

    pub fn finish(&mut self) -> Result<(), String> {
        if let Some(e) = self.failed.take() {
            return Err(e.to_string());
        }
        self.out.flush().map_err(|e| e.to_string())
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> EventSink<SortEvent> for ConsoleSink<W> {
    fn emit(&mut self, event: SortEvent) {
        let headline = if event.is_success() {
            event.headline().green().bold()
        } else {
            event.headline().yellow().bold()
        };
        self.line(format!("  {headline} {event}"));
    }
}

impl<W: Write> EventSink<QuizEvent> for ConsoleSink<W> {
    fn emit(&mut self, event: QuizEvent) {
        match &event {
            QuizEvent::Completed { rating, .. } => {
                self.line("");
                self.line(format!(
                    "  {} {}",
                    rating.emoji(),
                    "Quiz Complete!".bold()
                ));
                self.line(format!("  {event}"));
            }
            QuizEvent::Correct { .. } | QuizEvent::Incorrect { .. } => {
                let headline = if event.is_success() {
                    event.headline().green().bold()
                } else {
                    event.headline().yellow().bold()
                };
                self.line(format!("  {headline} {event}"));
                if let Some(explanation) = event.explanation() {
                    self.line(format!("  {}", explanation.dimmed()));
                }
            }
        }
    }
}

/// Print the prompt and read the next line into `line`.
/// Returns `false` on EOF.
fn read_command<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    line: &mut String,
) -> Result<bool, String> {
    write!(out, "> ").map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())?;

    line.clear();
    match input.read_line(line) {
        Ok(0) => Ok(false),
        Ok(_) => Ok(true),
        Err(e) => Err(e.to_string()),
    }
}
