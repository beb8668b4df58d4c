//! Shared test utilities for the sync-conflicts workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for directories of files with pinned mtimes

pub mod tree;

pub use tree::{TestTree, conflict_name};
