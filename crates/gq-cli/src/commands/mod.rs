pub mod assign;
pub mod divisions;
pub mod guess;
pub mod lookup;
pub mod qb;
pub mod qbs;
pub mod teams;
pub mod tui;

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use gq_core::{Division, QbRoster, Team, all_teams};
use gq_core::league::{team_by_abbr, team_by_name};

/// A line-oriented game console driven by [`repl`].
pub trait Console {
    /// Text printed once before the first prompt.
    fn banner(&self) -> String;

    /// Handle one line of input. `Err` is shown as a warning and the loop goes on.
    fn process(&mut self, input: &str) -> Result<String, String>;
}

/// Read commands from stdin until EOF or `quit`.
pub fn repl(console: &mut dyn Console) -> Result<(), String> {
    println!("{}", console.banner());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => println!("{}\n", e.yellow()),
        }
    }

    Ok(())
}

/// Whether `input` ends the session.
pub fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q")
}

/// Split a line into a lowercase command word and the rest.
pub fn split_command(input: &str) -> (String, &str) {
    let trimmed = input.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
        None => (trimmed.to_lowercase(), ""),
    }
}

/// Resolve a team from its full name or abbreviation, ignoring case.
pub fn resolve_team(input: &str) -> Option<&'static Team> {
    let needle = input.trim();
    team_by_name(needle)
        .or_else(|| team_by_abbr(&needle.to_lowercase()))
        .or_else(|| {
            all_teams()
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(needle))
        })
}

/// Resolve a division from its name or its 1-based position in display order.
pub fn resolve_division(input: &str) -> Option<Division> {
    let needle = input.trim();
    if let Ok(n) = needle.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Division::DISPLAY_ORDER.get(i).copied());
    }
    needle.parse().ok()
}

/// Numbered division menu in display order.
pub fn division_menu() -> String {
    Division::DISPLAY_ORDER
        .iter()
        .enumerate()
        .map(|(i, d)| format!("  {}. {}", i + 1, d))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the quarterback snapshot, reporting failures as messages.
pub fn load_roster(data: Option<&Path>) -> Result<QbRoster, String> {
    QbRoster::load_or_bundled(data).map_err(|e| format!("failed to load quarterback data: {e}"))
}
