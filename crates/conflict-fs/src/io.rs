//! Single-shot filesystem operations
//!
//! Each call is attempted exactly once and reports its own failure, so
//! callers can isolate errors to the file they concern.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::{Error, Result};

/// Read the modification time of `path`.
///
/// Follows symlinks, matching what a plain `stat` reports.
pub fn modified_time(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|e| Error::io(path, e))
}

/// Delete a single file.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| Error::io(path, e))
}

/// Rename `from` to `to`, replacing `to` if it exists.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Fail unless `path` is an existing directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}
