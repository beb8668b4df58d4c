//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use conflict_core::ResolveOptions;

/// Gets rid of Syncthing's "*.sync-conflict-YYYYMMDD-HHMMSS*" files
///
/// Checks the modification date of the conflicting files, keeps the newest
/// version under the original file name and deletes the other versions.
#[derive(Parser, Debug)]
#[command(name = "sync-conflicts")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Be careful without any optional arguments! Use --dry-run first to see \
which files would get deleted.")]
pub struct Cli {
    /// Directory to check for sync conflicts
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Dry run, do not delete or rename anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Prompt before resolving every sync conflict (ignored with --dry-run)
    #[arg(short, long)]
    pub interactive: bool,

    /// Log level: CRITICAL, ERROR, WARNING, INFO or DEBUG
    #[arg(short, long, value_name = "LEVEL", default_value = "INFO", env = "SYNC_CONFLICTS_LOG")]
    pub log: String,

    /// Print the final report as JSON instead of the summary line
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            dry_run: self.dry_run,
            interactive: self.interactive,
            recursive: self.recursive,
        }
    }
}
