//! Filesystem layer for sync-conflicts
//!
//! Provides the directory scanner that feeds the resolver and the
//! single-shot filesystem primitives (stat, delete, rename) it mutates with.

pub mod error;
pub mod io;
pub mod scan;

pub use error::{Error, Result};
pub use scan::{DirectoryListing, DirectoryScanner};
