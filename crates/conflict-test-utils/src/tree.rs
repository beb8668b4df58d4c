//! Scratch directory trees with controlled modification times.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;
use tempfile::TempDir;

/// Base epoch for pinned mtimes (2015-01-01T00:00:00Z).
pub const BASE_EPOCH: i64 = 1_420_070_400;

/// Build a conflict file name for `original` with the given marker stamp.
///
/// The marker goes before the final extension, the way Syncthing names
/// them: `conflict_name("report.txt", "20150101-120000")` returns
/// `report.sync-conflict-20150101-120000.txt`.
pub fn conflict_name(original: &str, stamp: &str) -> String {
    match original.rfind('.') {
        Some(idx) => format!(
            "{}.sync-conflict-{}{}",
            &original[..idx],
            stamp,
            &original[idx..]
        ),
        None => format!("{original}.sync-conflict-{stamp}"),
    }
}

/// A temporary directory populated with files whose mtimes are pinned.
///
/// The directory is removed when the value is dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create an empty tree.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("TestTree: failed to create tempdir: {e}"));
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path for a path relative to the root.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write `rel` with `content` and set its mtime to `BASE_EPOCH + offset_secs`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Panics
    /// Panics if any filesystem operation fails.
    pub fn file(&self, rel: impl AsRef<Path>, content: &str, offset_secs: i64) -> &Self {
        let path = self.path(&rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestTree: failed to create {}: {e}", parent.display()));
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree: failed to write {}: {e}", path.display()));
        self.touch(rel, offset_secs)
    }

    /// Set the mtime of an existing file.
    ///
    /// # Panics
    /// Panics if the mtime cannot be set.
    pub fn touch(&self, rel: impl AsRef<Path>, offset_secs: i64) -> &Self {
        let path = self.path(rel);
        let time = FileTime::from_unix_time(BASE_EPOCH + offset_secs, 0);
        filetime::set_file_mtime(&path, time)
            .unwrap_or_else(|e| panic!("TestTree: failed to set mtime on {}: {e}", path.display()));
        self
    }

    /// Create an empty subdirectory.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn dir(&self, rel: impl AsRef<Path>) -> &Self {
        let path = self.path(rel);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree: failed to create {}: {e}", path.display()));
        self
    }

    /// Read a file's content, or `None` if it does not exist.
    pub fn read(&self, rel: impl AsRef<Path>) -> Option<String> {
        fs::read_to_string(self.path(rel)).ok()
    }

    pub fn exists(&self, rel: impl AsRef<Path>) -> bool {
        self.path(rel).exists()
    }

    /// Every file under the root, keyed by relative path (with `/`
    /// separators), valued by content.
    ///
    /// Used to assert that an operation left the tree byte-identical.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        let mut out = BTreeMap::new();
        collect(self.root(), self.root(), &mut out);
        out
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect(base: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("TestTree: failed to read {}: {e}", dir.display()));
    for entry in entries {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(base, &path, out);
        } else {
            let rel = path
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            out.insert(rel, fs::read(&path).unwrap());
        }
    }
}
