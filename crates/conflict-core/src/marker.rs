//! Conflict marker recognition
//!
//! Syncthing keeps the losing side of a conflict by renaming it to
//! `<root>.sync-conflict-YYYYMMDD-HHMMSS[.ext]`. This module decomposes such
//! names back into the original file name they shadow.
//!
//! Names are matched as raw bytes, so file names that are not valid UTF-8
//! are recognised as well (on unix).

use regex::bytes::Regex;
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

/// Literal infix that introduces a conflict marker.
pub const MARKER_INFIX: &str = ".sync-conflict-";

/// Anchored conflict marker pattern.
///
/// The extension is a single trailing dot segment; anything before it (dots
/// included) up to the marker belongs to the root. Unicode mode is off so
/// `.` and `[^.]` match arbitrary bytes.
pub static CONFLICT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^(?P<root>.*)\.sync-conflict-(?P<stamp>\d{8}-\d{6})(?P<extension>\.[^.]*)?$")
        .unwrap()
});

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Some(name.as_bytes())
}

// Elsewhere only names that are valid Unicode can be matched
#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    name.to_str().map(str::as_bytes)
}

#[cfg(unix)]
fn name_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
fn name_from_bytes(bytes: &[u8]) -> OsString {
    // name_bytes only hands out UTF-8, and captures split it on ASCII bytes
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}

/// A file name decomposed around its conflict marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictMarker {
    root: OsString,
    timestamp: String,
    extension: OsString,
}

impl ConflictMarker {
    /// Parse a bare file name (not a path).
    ///
    /// Returns `None` unless the whole name matches the marker pattern.
    pub fn parse<S: AsRef<OsStr> + ?Sized>(name: &S) -> Option<Self> {
        let bytes = name_bytes(name.as_ref())?;
        if !contains_infix(bytes) {
            return None;
        }

        let caps = CONFLICT_PATTERN.captures(bytes)?;
        Some(Self {
            root: name_from_bytes(&caps["root"]),
            timestamp: String::from_utf8_lossy(&caps["stamp"]).into_owned(),
            extension: caps
                .name("extension")
                .map(|m| name_from_bytes(m.as_bytes()))
                .unwrap_or_default(),
        })
    }

    /// Base name preceding the marker.
    ///
    /// Empty for dotfiles: Syncthing names the conflict copy of `.bashrc`
    /// `.sync-conflict-<stamp>.bashrc`.
    pub fn root(&self) -> &OsStr {
        &self.root
    }

    /// The `YYYYMMDD-HHMMSS` token. Only used for recognition; file mtimes
    /// decide the winner.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Trailing extension including its dot, or empty.
    pub fn extension(&self) -> &OsStr {
        &self.extension
    }

    /// Name of the file this conflict copy shadows.
    pub fn original_name(&self) -> OsString {
        let mut name = self.root.clone();
        name.push(&self.extension);
        name
    }
}

fn contains_infix(bytes: &[u8]) -> bool {
    bytes
        .windows(MARKER_INFIX.len())
        .any(|w| w == MARKER_INFIX.as_bytes())
}

/// Whether `name` carries a conflict marker.
pub fn is_conflict_name<S: AsRef<OsStr> + ?Sized>(name: &S) -> bool {
    name_bytes(name.as_ref())
        .is_some_and(|bytes| contains_infix(bytes) && CONFLICT_PATTERN.is_match(bytes))
}
