//! Conflict detection and resolution for Syncthing `.sync-conflict-` copies
//!
//! This crate implements:
//!
//! - **Marker matching**: recognise `<root>.sync-conflict-YYYYMMDD-HHMMSS[.ext]`
//!   names and derive the original name they shadow
//! - **Grouping**: link conflict copies to an original in the same directory
//! - **Resolution**: keep the newest candidate, delete the rest, rename the
//!   survivor into place, with dry-run and interactive confirmation modes
//!
//! # Architecture
//!
//! ```text
//!        conflict-cli
//!             |
//!       conflict-core
//!             |
//!        conflict-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use conflict_core::{AlwaysConfirm, ResolveOptions, Resolver};
//!
//! let mut confirm = AlwaysConfirm;
//! let options = ResolveOptions { dry_run: true, ..Default::default() };
//! let report = Resolver::new(options, &mut confirm)
//!     .run(std::path::Path::new("/srv/sync"))
//!     .unwrap();
//! println!("{}", report.summary_line());
//! ```

pub mod error;
pub mod group;
pub mod marker;
pub mod options;
pub mod resolve;

pub use error::{Error, Result};
pub use group::{ConflictGroups, group_conflicts};
pub use marker::{CONFLICT_PATTERN, ConflictMarker, MARKER_INFIX, is_conflict_name};
pub use options::ResolveOptions;
pub use resolve::{AlwaysConfirm, Confirm, GroupOutcome, ResolveReport, Resolver, pick_winner};
