use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use mm_core::QuizQuestion;
use mm_quiz::{QuizAction, QuizPhase, QuizSession};

use super::ConsoleSink;

const HELP: &str = "\
  Commands:
    a | b | c | d         choose an answer (numbers 1-4 work too)
    submit | s            submit the chosen answer
    next                  go to the next question
    <enter>               submit, then next
    status                show score and progress
    reset                 start the quiz over
    help                  show this help
    quit | q              exit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Choose(usize),
    Submit,
    Next,
    Status,
    Reset,
    Help,
    Quit,
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let lower = input.to_lowercase();
    match lower.as_str() {
        "" | "submit" | "s" => Command::Submit,
        "next" | "continue" => Command::Next,
        "status" | "score" => Command::Status,
        "reset" | "restart" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => parse_choice(other).map_or(Command::Unknown, Command::Choose),
    }
}

/// `a`..`z` or a 1-based number, as a 0-based option index.
fn parse_choice(input: &str) -> Option<usize> {
    let mut chars = input.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_ascii_lowercase()
    {
        return Some(c as usize - 'a' as usize);
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n - 1),
        _ => None,
    }
}

pub fn run(content: Option<&Path>) -> Result<(), String> {
    let pack = super::load_pack(content)?;
    let session =
        QuizSession::new(pack.questions).map_err(|e| format!("failed to start quiz: {e}"))?;

    let stdin = io::stdin();
    play(session, stdin.lock(), io::stdout().lock())
}

/// Drive a quiz session from line input until EOF or `quit`.
fn play<R: BufRead, W: Write>(
    mut session: QuizSession,
    mut input: R,
    out: W,
) -> Result<(), String> {
    let mut sink = ConsoleSink::new(out);
    sink.line(format!(
        "  {} Test your knowledge of metals and non-metals!",
        "Quiz".bold()
    ));
    sink.line("  Type 'help' for commands, 'quit' to exit.\n");
    print_question(&session, &mut sink);

    let mut line = String::new();
    loop {
        sink.finish()?;
        if !super::read_command(&mut input, sink.writer(), &mut line)? {
            break;
        }

        // A bare Enter submits, then moves on once the answer is shown.
        let cmd = match parse_command(line.trim()) {
            Command::Submit if line.trim().is_empty() => match session.phase() {
                QuizPhase::Answering if session.selected().is_some() => Command::Submit,
                QuizPhase::Submitted => Command::Next,
                _ => continue,
            },
            cmd => cmd,
        };

        match cmd {
            Command::Choose(option) => choose(&mut session, option, &mut sink),
            Command::Submit => submit(&mut session, &mut sink),
            Command::Next => next(&mut session, &mut sink),
            Command::Status => print_status(&session, &mut sink),
            Command::Reset => {
                session.apply_to(QuizAction::Reset, &mut sink);
                sink.line("  Quiz reset.\n");
                print_question(&session, &mut sink);
            }
            Command::Help => sink.line(HELP),
            Command::Quit => break,
            Command::Unknown => sink.line(
                "  Unknown command. Type 'help' for commands."
                    .yellow()
                    .to_string(),
            ),
        }
        sink.line("");
    }

    sink.finish()
}

fn choose<W: Write>(session: &mut QuizSession, option: usize, sink: &mut ConsoleSink<W>) {
    match session.phase() {
        QuizPhase::Completed => {
            sink.line("  The quiz is over. Type 'reset' to try again.");
            return;
        }
        QuizPhase::Submitted => {
            sink.line("  Answer already submitted. Type 'next' to continue.");
            return;
        }
        QuizPhase::Answering => {}
    }

    session.apply_to(QuizAction::Choose(option), sink);
    match (session.selected(), session.current()) {
        (Some(chosen), Some(question)) if chosen == option => sink.line(format!(
            "  Selected {}: {}. Press Enter or type 'submit'.",
            QuizQuestion::option_letter(chosen),
            question.options[chosen].bold()
        )),
        (_, Some(question)) => sink.line(
            format!(
                "  There is no option {}. Pick A to {}.",
                QuizQuestion::option_letter(option),
                QuizQuestion::option_letter(question.options.len() - 1)
            )
            .yellow()
            .to_string(),
        ),
        (_, None) => {}
    }
}

fn submit<W: Write>(session: &mut QuizSession, sink: &mut ConsoleSink<W>) {
    match session.phase() {
        QuizPhase::Completed => {
            sink.line("  The quiz is over. Type 'reset' to try again.");
            return;
        }
        QuizPhase::Submitted => {
            sink.line("  Already submitted. Type 'next' to continue.");
            return;
        }
        QuizPhase::Answering if session.selected().is_none() => {
            sink.line("  Choose an answer first (a, b, c or d).".yellow().to_string());
            return;
        }
        QuizPhase::Answering => {}
    }

    session.apply_to(QuizAction::Submit, sink);
    if session.is_last_question() {
        sink.line("  Type 'next' to see your results.");
    } else {
        sink.line("  Type 'next' for the next question.");
    }
}

fn next<W: Write>(session: &mut QuizSession, sink: &mut ConsoleSink<W>) {
    match session.phase() {
        QuizPhase::Completed => {
            sink.line("  The quiz is over. Type 'reset' to try again.");
            return;
        }
        QuizPhase::Answering => {
            sink.line("  Submit your answer first.".yellow().to_string());
            return;
        }
        QuizPhase::Submitted => {}
    }

    session.apply_to(QuizAction::Advance, sink);
    if session.is_complete() {
        print_results(session, sink);
    } else {
        print_question(session, sink);
    }
}

fn print_question<W: Write>(session: &QuizSession, sink: &mut ConsoleSink<W>) {
    let Some(question) = session.current() else {
        return;
    };
    sink.line(format!(
        "  Question {} of {}   Score: {}",
        session.index() + 1,
        session.len(),
        session.score()
    ));
    sink.line(format!("  {} {}", question.emoji, question.prompt.bold()));
    for (i, option) in question.options.iter().enumerate() {
        sink.line(format!("    {}) {option}", QuizQuestion::option_letter(i)));
    }
}

fn print_status<W: Write>(session: &QuizSession, sink: &mut ConsoleSink<W>) {
    let answered = session.history().len();
    sink.line(format!(
        "  Score: {} / {}   Answered: {answered} of {}",
        session.score(),
        session.max_score(),
        session.len()
    ));
    if let Some(rating) = session.rating() {
        sink.line(format!("  Rating: {rating}"));
    }
}

fn print_results<W: Write>(session: &QuizSession, sink: &mut ConsoleSink<W>) {
    sink.line(format!(
        "  You answered {}% of the questions correctly.",
        session.percent_correct()
    ));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", ""]);
    for (i, review) in session.review().enumerate() {
        let mark = if review.is_correct() { "✓" } else { "✗" };
        table.add_row(vec![
            (i + 1).to_string(),
            review.question.prompt.clone(),
            review.chosen_text().to_string(),
            review.question.correct_text().to_string(),
            mark.to_string(),
        ]);
    }
    sink.line(table);
    sink.line("  Type 'reset' to try again or 'quit' to exit.");
}
