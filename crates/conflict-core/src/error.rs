//! Error types for conflict-core

/// Result type for conflict-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in conflict-core operations
///
/// Only conditions that stop a whole run surface here. Failures scoped to
/// one file, group or directory are recorded in the
/// [`ResolveReport`](crate::ResolveReport) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from conflict-fs
    #[error(transparent)]
    Fs(#[from] conflict_fs::Error),
}
