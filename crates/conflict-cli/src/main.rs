//! sync-conflicts CLI
//!
//! Resolves Syncthing `.sync-conflict-` files by keeping the newest version
//! of each file under its original name.

mod cli;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;
use conflict_core::{Confirm, ResolveReport, Resolver};

use cli::Cli;
use error::Result;
use interactive::TerminalConfirm;
use logging::LogLevel;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level: LogLevel = cli.log.parse()?;
    logging::init(level)?;
    tracing::debug!(?cli, "Starting");

    let mut confirm = TerminalConfirm;
    let report = execute(&cli, &mut confirm)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary_line());
    }

    Ok(())
}

/// Validate the target and resolve everything beneath it.
fn execute(cli: &Cli, confirm: &mut dyn Confirm) -> Result<ResolveReport> {
    let report = Resolver::new(cli.resolve_options(), confirm).run(&cli.directory)?;

    if !report.is_clean() {
        tracing::warn!(errors = report.errors.len(), "Some operations failed, see log above");
    }

    Ok(report)
}
