//! Run options for the resolver

/// Options controlling how conflicts are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Report intended deletions and renames without touching the filesystem.
    pub dry_run: bool,
    /// Ask before mutating each group. Ignored when `dry_run` is set.
    pub interactive: bool,
    /// Descend into subdirectories of the target root.
    pub recursive: bool,
}

impl ResolveOptions {
    /// Whether the confirmation gate applies.
    pub fn needs_confirmation(&self) -> bool {
        self.interactive && !self.dry_run
    }
}
