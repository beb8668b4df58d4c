//! Resolution outcomes and the run-wide report

use serde::Serialize;

/// Terminal state of one conflict group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupOutcome {
    /// Fewer than two distinct candidates; nothing to do
    NoConflict,
    /// The user declined the proposed resolution
    Declined,
    /// Every deletion and rename succeeded (or was reported, in dry-run)
    Resolved,
    /// At least one deletion or the rename failed
    PartiallyFailed,
    /// Stopped before any mutation (stat or confirmation failure)
    Aborted,
}

/// Accumulated result of a resolution pass.
///
/// Counters only reflect operations that actually completed, so a dry run
/// always reports zero deletions and renames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    /// Files deleted
    pub deleted: usize,
    /// Winners renamed to their original name
    pub renamed: usize,
    /// Conflict copies with no original next to them
    pub orphaned: usize,
    /// Groups that ended `Resolved`
    pub groups_resolved: usize,
    /// Groups that ended `NoConflict` or `Declined`
    pub groups_skipped: usize,
    /// Groups that ended `PartiallyFailed` or `Aborted`
    pub groups_failed: usize,
    /// Actions taken (or, in dry-run, that would have been taken)
    pub actions: Vec<String>,
    /// Errors encountered
    pub errors: Vec<String>,
}

impl ResolveReport {
    /// Count a finished group.
    pub fn record(&mut self, outcome: GroupOutcome) {
        match outcome {
            GroupOutcome::Resolved => self.groups_resolved += 1,
            GroupOutcome::NoConflict | GroupOutcome::Declined => self.groups_skipped += 1,
            GroupOutcome::PartiallyFailed | GroupOutcome::Aborted => self.groups_failed += 1,
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ResolveReport) {
        self.deleted += other.deleted;
        self.renamed += other.renamed;
        self.orphaned += other.orphaned;
        self.groups_resolved += other.groups_resolved;
        self.groups_skipped += other.groups_skipped;
        self.groups_failed += other.groups_failed;
        self.actions.extend(other.actions);
        self.errors.extend(other.errors);
    }

    /// True if nothing went wrong.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// One-line summary printed at the end of a run.
    pub fn summary_line(&self) -> String {
        format!(
            "Done, {} files deleted, {} files renamed.",
            self.deleted, self.renamed
        )
    }
}
