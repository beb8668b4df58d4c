//! Conflict resolution
//!
//! This module provides:
//! - **confirm**: the interactive confirmation seam
//! - **report**: per-group outcomes and the run-wide report
//! - **resolver**: newest-wins selection and the delete/rename mutation

mod confirm;
mod report;
mod resolver;

pub use confirm::{AlwaysConfirm, Confirm};
pub use report::{GroupOutcome, ResolveReport};
pub use resolver::{Resolver, pick_winner};
