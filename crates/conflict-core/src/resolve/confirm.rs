//! Confirmation before a group is mutated

use std::io;
use std::path::{Path, PathBuf};

/// Decides whether a proposed resolution may go ahead.
///
/// Only consulted in interactive, non-dry-run mode. Returning `Ok(false)`
/// skips the group without error; returning `Err` aborts the group and is
/// recorded as a failure.
pub trait Confirm {
    fn confirm(&mut self, winner: &Path, losers: &[PathBuf]) -> io::Result<bool>;
}

/// Approves every resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _winner: &Path, _losers: &[PathBuf]) -> io::Result<bool> {
        Ok(true)
    }
}
