//! Directory scanning
//!
//! Walks a target root (optionally its whole subtree) and yields one
//! [`DirectoryListing`] per directory: the names of the plain files that
//! live directly inside it. Conflict markers are only ever resolved against
//! siblings, so this per-directory batch is the unit the resolver consumes.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// File names found directly inside one directory.
///
/// Names are kept as raw `OsString`s so files whose names are not valid
/// UTF-8 take part in conflict resolution like any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    /// The directory that was listed
    pub dir: PathBuf,
    /// Names (not paths) of the non-directory entries
    pub files: BTreeSet<OsString>,
}

impl DirectoryListing {
    /// Build a listing from already-known names.
    pub fn new<I, S>(dir: impl Into<PathBuf>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            dir: dir.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Read the listing of `dir` from disk.
    pub fn read(dir: &Path) -> Result<Self> {
        let mut files = BTreeSet::new();

        for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(dir = %dir.display(), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            let path = entry.path();
            let is_dir = match entry.file_type() {
                Ok(ft) if ft.is_symlink() => path.is_dir(),
                Ok(ft) => ft.is_dir(),
                Err(_) => path.is_dir(),
            };
            if !is_dir {
                files.insert(entry.file_name());
            }
        }

        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    /// Whether `name` is one of the listed files.
    pub fn contains<S: AsRef<OsStr> + ?Sized>(&self, name: &S) -> bool {
        self.files.contains(name.as_ref())
    }

    /// Full path of a listed name inside this directory.
    pub fn path_of<S: AsRef<OsStr> + ?Sized>(&self, name: &S) -> PathBuf {
        self.dir.join(name.as_ref())
    }
}

/// Produces per-directory listings for a root.
#[derive(Debug, Clone)]
pub struct DirectoryScanner {
    root: PathBuf,
    recursive: bool,
}

impl DirectoryScanner {
    /// Scan only `root` itself unless [`recursive`](Self::recursive) is set.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
        }
    }

    /// Descend into subdirectories. Symlinked directories are not followed.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Iterate over listings in walk order.
    ///
    /// An `Err` item means one directory could not be read; iteration
    /// continues with the rest of the tree.
    pub fn scan(&self) -> Scan {
        let max_depth = if self.recursive { usize::MAX } else { 0 };
        Scan {
            walker: WalkDir::new(&self.root)
                .max_depth(max_depth)
                .sort_by_file_name()
                .into_iter(),
            last_failed: None,
        }
    }
}

impl<'a> IntoIterator for &'a DirectoryScanner {
    type Item = Result<DirectoryListing>;
    type IntoIter = Scan;

    fn into_iter(self) -> Scan {
        self.scan()
    }
}

/// Iterator returned by [`DirectoryScanner::scan`].
pub struct Scan {
    walker: walkdir::IntoIter,
    last_failed: Option<PathBuf>,
}

impl Iterator for Scan {
    type Item = Result<DirectoryListing>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.next()? {
                Ok(entry) => {
                    let is_dir = entry.file_type().is_dir()
                        || (entry.depth() == 0 && entry.path().is_dir());
                    if !is_dir {
                        continue;
                    }
                    let listing = DirectoryListing::read(entry.path());
                    if listing.is_err() {
                        self.last_failed = Some(entry.path().to_path_buf());
                    }
                    return Some(listing);
                }
                Err(err) => {
                    // walkdir reports the same unreadable directory we just failed to list
                    if err.path().is_some() && err.path() == self.last_failed.as_deref() {
                        continue;
                    }
                    return Some(Err(err.into()));
                }
            }
        }
    }
}
