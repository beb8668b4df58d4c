//! Interactive confirmation for conflict groups
//!
//! Uses dialoguer when both stdin and stderr are terminals. Otherwise the
//! prompt goes to stderr and one line is read from stdin, so answers can be
//! piped in (`yes | sync-conflicts -i DIR`).

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use conflict_core::Confirm;
use dialoguer::Confirm as Prompt;

/// Lists the files that would be deleted and asks before going ahead.
///
/// Everything is written to stderr so stdout carries only the summary or
/// the JSON report.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, winner: &Path, losers: &[PathBuf]) -> io::Result<bool> {
        eprintln!();
        for loser in losers {
            eprintln!("  {} {}", "-".red(), loser.display());
        }

        let prompt = format!(
            "Keep {} and delete the files above?",
            winner.display().to_string().cyan()
        );

        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            return Prompt::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(io::Error::other);
        }

        let mut stderr = io::stderr().lock();
        write!(stderr, "{prompt} [y/N] ")?;
        stderr.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

/// Read one answer line. Only `y` (any case) means yes; end of input is no.
fn read_answer(input: &mut impl BufRead) -> io::Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
