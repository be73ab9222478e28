//! Carry the change between two versions forward onto a third.
//!
//! Given `previous`, `latest` and `current`, the highest-order field that
//! differs between `previous` and `latest` is shifted by the same amount in
//! `current`, and every lower field of the result is reset to zero.

mod apply;
pub mod args;
pub mod error;
mod version;

pub use apply::{apply_change, changed_field, compute_applied};
pub use args::{UsageError, VersionArgs, VersionFlags, normalize_args, select_versions};
pub use error::{Result, SemverError};
pub use version::{Field, SemanticVersion};
