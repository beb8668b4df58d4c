//! Grouping conflict copies under their original file
//!
//! Grouping is scoped to one directory listing: a conflict copy is only
//! ever linked to an original that sits next to it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use conflict_fs::DirectoryListing;

use crate::marker::ConflictMarker;

/// Conflict copies of one directory, keyed by original file path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictGroups {
    /// Original path -> conflict copy paths
    pub groups: BTreeMap<PathBuf, BTreeSet<PathBuf>>,
    /// Conflict copies whose original is absent from the listing
    pub orphans: Vec<PathBuf>,
}

impl ConflictGroups {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of conflict copies linked to an original.
    pub fn conflict_count(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }
}

/// Link every conflict-marked name in `listing` to its original.
///
/// Names that carry no marker are ignored here; they only matter as
/// possible originals. A marked name whose original is not listed is an
/// orphan: it is reported and never put in a group.
pub fn group_conflicts(listing: &DirectoryListing) -> ConflictGroups {
    let mut result = ConflictGroups::default();

    for name in &listing.files {
        let Some(marker) = ConflictMarker::parse(name) else {
            continue;
        };

        let original = marker.original_name();
        if listing.contains(&original) {
            tracing::debug!(
                dir = %listing.dir.display(),
                original = %original.to_string_lossy(),
                conflict = %name.to_string_lossy(),
                "Linked conflict"
            );
            result
                .groups
                .entry(listing.path_of(&original))
                .or_default()
                .insert(listing.path_of(name));
        } else {
            let path = listing.path_of(name);
            tracing::warn!(path = %path.display(), "Orphaned conflict marker: no original file found");
            result.orphans.push(path);
        }
    }

    result
}
