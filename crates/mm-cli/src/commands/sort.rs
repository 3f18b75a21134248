use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use mm_core::{Category, ClassificationItem};
use mm_sort::{SortAction, SortConfig, SortSession};

use super::ConsoleSink;

const HELP: &str = "\
  Commands:
    items                 list the items still to sort
    pick <item>           pick up an item by number, id or name
    metal | m             drop the held item in the Metals box
    non-metal | n         drop the held item in the Non-Metals box
    status                show score, progress and both boxes
    reset                 start over
    help                  show this help
    quit | q              exit";

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Items,
    Pick(&'a str),
    Drop(Category),
    Status,
    Reset,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Command<'_> {
    let (head, rest) = match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    };
    match head.to_lowercase().as_str() {
        "items" | "list" | "ls" => Command::Items,
        "pick" | "select" | "take" if !rest.is_empty() => Command::Pick(rest),
        "status" | "score" => Command::Status,
        "reset" | "restart" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => match Category::parse(input) {
            Some(bin) => Command::Drop(bin),
            // Anything else is taken as an item name, e.g. `gold`.
            None => Command::Pick(input),
        },
    }
}

pub fn run(content: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let pack = super::load_pack(content)?;
    let config = SortConfig::default().with_shuffle(seed);
    let session = SortSession::with_config(pack.sort_items, config)
        .map_err(|e| format!("failed to start sorting game: {e}"))?;

    let stdin = io::stdin();
    play(session, stdin.lock(), io::stdout().lock())
}

/// Drive a sorting session from line input until EOF or `quit`.
fn play<R: BufRead, W: Write>(
    mut session: SortSession,
    mut input: R,
    out: W,
) -> Result<(), String> {
    let mut sink = ConsoleSink::new(out);
    sink.line(format!(
        "  {} Sort the items into Metals and Non-Metals!",
        "Sorting Game".bold()
    ));
    sink.line("  Type 'help' for commands, 'quit' to exit.\n");
    print_items(&session, &mut sink);

    let mut line = String::new();
    loop {
        sink.finish()?;
        if !super::read_command(&mut input, sink.writer(), &mut line)? {
            break;
        }

        let cmd = line.trim();
        if cmd.is_empty() {
            continue;
        }

        match parse_command(cmd) {
            Command::Items => print_items(&session, &mut sink),
            Command::Pick(key) => pick(&mut session, key, &mut sink),
            Command::Drop(bin) => {
                if session.pending().is_none() {
                    sink.line(
                        "  Pick an item first, e.g. 'pick 1' or 'pick gold'."
                            .yellow()
                            .to_string(),
                    );
                    continue;
                }
                session.apply_to(SortAction::DropInto(bin), &mut sink);
                if session.is_finished() {
                    sink.line("  Type 'reset' to play again or 'quit' to exit.");
                } else {
                    sink.line(format!("  {} left to sort.", session.pool().len()));
                }
            }
            Command::Status => print_status(&session, &mut sink),
            Command::Reset => {
                session.apply_to(SortAction::Reset, &mut sink);
                sink.line("  Game reset. All items are back in the pool.");
                print_items(&session, &mut sink);
            }
            Command::Help => sink.line(HELP),
            Command::Quit => break,
        }
        sink.line("");
    }

    sink.finish()
}

/// Resolve `key` against the pool (1-based number, id or name) and pick it up.
fn pick<W: Write>(session: &mut SortSession, key: &str, sink: &mut ConsoleSink<W>) {
    if session.is_finished() {
        sink.line("  Everything is sorted! Type 'reset' to play again.");
        return;
    }

    let found = match key.parse::<usize>() {
        Ok(n) if n >= 1 => session.pool().get(n - 1),
        _ => session.find_in_pool(key),
    };
    let Some(item) = found.cloned() else {
        sink.line(
            format!("  No item matching '{key}'. Type 'items' to see what is left.")
                .yellow()
                .to_string(),
        );
        return;
    };

    session.apply_to(SortAction::select(item.id.clone()), sink);
    sink.line(format!(
        "  You picked up {}. Is it a metal or a non-metal?",
        item.to_string().bold()
    ));
}

fn print_items<W: Write>(session: &SortSession, sink: &mut ConsoleSink<W>) {
    if session.pool().is_empty() {
        sink.line("  No items left to sort.");
        return;
    }
    sink.line("  Items to sort:");
    for (i, item) in session.pool().iter().enumerate() {
        sink.line(format!("    {}. {item}", i + 1));
    }
}

fn print_status<W: Write>(session: &SortSession, sink: &mut ConsoleSink<W>) {
    sink.line(format!(
        "  Score: {} / {}   Sorted: {} ({}%)",
        session.score().to_string().bold(),
        session.max_score(),
        session.progress(),
        session.progress().percent()
    ));
    if let Some(item) = session.pending() {
        sink.line(format!("  Holding: {item}"));
    }
    for bin in Category::ALL {
        sink.line(format!(
            "  {} {}: {}",
            bin.badge(),
            bin.plural(),
            names(session.bin(bin))
        ));
    }
}

fn names(items: &[ClassificationItem]) -> String {
    if items.is_empty() {
        return "(empty)".into();
    }
    items
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
