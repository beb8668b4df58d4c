//! Newest-wins resolution of conflict groups
//!
//! For each group the candidate with the latest modification time is kept,
//! every other candidate is deleted, and the survivor is renamed to the
//! original file name if it is not already the original. Each filesystem
//! operation is attempted once; failures are logged and isolated to the
//! file they concern, so re-running the tool retries only what is left.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use conflict_fs::{DirectoryListing, DirectoryScanner, io};

use super::confirm::Confirm;
use super::report::{GroupOutcome, ResolveReport};
use crate::Result;
use crate::group::group_conflicts;
use crate::options::ResolveOptions;

/// Select the newest candidate.
///
/// Ties on modification time go to `original` when it is among the tied
/// candidates (saving a rename), otherwise to the greatest path. Returns
/// `None` only for an empty slice.
pub fn pick_winner<'p>(original: &Path, candidates: &[(&'p Path, SystemTime)]) -> Option<&'p Path> {
    candidates
        .iter()
        .max_by(|a, b| {
            (a.1, a.0 == original, a.0).cmp(&(b.1, b.0 == original, b.0))
        })
        .map(|(path, _)| *path)
}

/// Applies newest-wins resolution to conflict groups.
pub struct Resolver<'a> {
    options: ResolveOptions,
    confirm: &'a mut dyn Confirm,
}

impl<'a> Resolver<'a> {
    /// `confirm` is consulted only when `options` asks for interactive,
    /// non-dry-run operation.
    pub fn new(options: ResolveOptions, confirm: &'a mut dyn Confirm) -> Self {
        Self { options, confirm }
    }

    /// Resolve every conflict under `root`.
    ///
    /// Fails only if `root` is not a directory; everything else is recorded
    /// in the returned report.
    pub fn run(&mut self, root: &Path) -> Result<ResolveReport> {
        io::ensure_directory(root)?;
        let scanner = DirectoryScanner::new(root).recursive(self.options.recursive);
        Ok(self.resolve_scan(&scanner))
    }

    /// Resolve each directory the scanner yields, one at a time.
    pub fn resolve_scan(&mut self, scanner: &DirectoryScanner) -> ResolveReport {
        let mut report = ResolveReport::default();

        for listing in scanner {
            match listing {
                Ok(listing) => report.merge(self.resolve_listing(&listing)),
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e, "Skipping unreadable directory");
                    report.errors.push(e.to_string());
                }
            }
        }

        report
    }

    /// Group the conflicts of one directory and resolve each group.
    pub fn resolve_listing(&mut self, listing: &DirectoryListing) -> ResolveReport {
        let groups = group_conflicts(listing);
        let mut report = ResolveReport {
            orphaned: groups.orphans.len(),
            ..Default::default()
        };

        for (original, conflicts) in &groups.groups {
            self.resolve_group(original, conflicts, &mut report);
        }

        report
    }

    /// Resolve a single group, recording actions and counters in `report`.
    pub fn resolve_group(
        &mut self,
        original: &Path,
        conflicts: &BTreeSet<PathBuf>,
        report: &mut ResolveReport,
    ) -> GroupOutcome {
        let outcome = self.resolve_group_inner(original, conflicts, report);
        report.record(outcome);
        outcome
    }

    fn resolve_group_inner(
        &mut self,
        original: &Path,
        conflicts: &BTreeSet<PathBuf>,
        report: &mut ResolveReport,
    ) -> GroupOutcome {
        let mut candidates = conflicts.clone();
        candidates.insert(original.to_path_buf());

        if candidates.len() < 2 {
            tracing::info!(path = %original.display(), "No sync conflict");
            return GroupOutcome::NoConflict;
        }

        let mut stamped = Vec::with_capacity(candidates.len());
        for path in &candidates {
            match io::modified_time(path) {
                Ok(mtime) => stamped.push((path.as_path(), mtime)),
                Err(e) => {
                    tracing::error!(
                        original = %original.display(),
                        error = %e,
                        "Cannot read modification time, leaving conflict untouched"
                    );
                    report.errors.push(e.to_string());
                    return GroupOutcome::Aborted;
                }
            }
        }

        let Some(winner) = pick_winner(original, &stamped) else {
            return GroupOutcome::NoConflict;
        };
        let losers: Vec<PathBuf> = candidates
            .iter()
            .filter(|path| path.as_path() != winner)
            .cloned()
            .collect();

        tracing::debug!(
            original = %original.display(),
            winner = %winner.display(),
            losers = losers.len(),
            "Selected newest version"
        );

        if self.options.needs_confirmation() {
            match self.confirm.confirm(winner, &losers) {
                Ok(true) => {}
                Ok(false) => {
                    tracing::info!(original = %original.display(), "Skipped by user");
                    return GroupOutcome::Declined;
                }
                Err(e) => {
                    tracing::error!(original = %original.display(), error = %e, "Confirmation failed");
                    report
                        .errors
                        .push(format!("Confirmation failed for {}: {}", original.display(), e));
                    return GroupOutcome::Aborted;
                }
            }
        }

        let mut failed = false;

        for loser in &losers {
            if self.options.dry_run {
                tracing::info!("DRY RUN: would delete {}", loser.display());
                report
                    .actions
                    .push(format!("[dry-run] Would delete {}", loser.display()));
                continue;
            }

            match io::remove_file(loser) {
                Ok(()) => {
                    tracing::debug!(path = %loser.display(), "Deleted");
                    report.deleted += 1;
                    report.actions.push(format!("Deleted {}", loser.display()));
                }
                Err(e) => {
                    tracing::error!(path = %loser.display(), error = %e, "Error deleting file");
                    report.errors.push(e.to_string());
                    failed = true;
                }
            }
        }

        if winner != original {
            if self.options.dry_run {
                tracing::info!(
                    "DRY RUN: would rename {} to {}",
                    winner.display(),
                    original.display()
                );
                report.actions.push(format!(
                    "[dry-run] Would rename {} to {}",
                    winner.display(),
                    original.display()
                ));
            } else {
                match io::rename(winner, original) {
                    Ok(()) => {
                        tracing::debug!(
                            from = %winner.display(),
                            to = %original.display(),
                            "Renamed"
                        );
                        report.renamed += 1;
                        report.actions.push(format!(
                            "Renamed {} to {}",
                            winner.display(),
                            original.display()
                        ));
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Error renaming file");
                        report.errors.push(e.to_string());
                        failed = true;
                    }
                }
            }
        }

        if failed {
            GroupOutcome::PartiallyFailed
        } else {
            GroupOutcome::Resolved
        }
    }
}
