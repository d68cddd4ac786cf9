//! The clone engine seam
//!
//! The retry loop only talks to a [`CloneEngine`], which keeps the recovery
//! logic testable without a network or a git binary.

use super::error::CloneError;
use serde::Serialize;
use std::path::Path;

/// References found after a successful transfer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClonedRefs {
    /// Remote-tracking branches in enumeration order, e.g. `origin/main`
    pub branches: Vec<String>,
    /// Tags in enumeration order, e.g. `v1.0`
    pub tags: Vec<String>,
}

/// Outcome of one clone attempt
pub type CloneAttemptResult = std::result::Result<ClonedRefs, CloneError>;

/// Performs one full clone of `url` into `destination`
///
/// Failures before or during the transfer are returned as [`CloneError`];
/// anything that goes wrong after the transfer is committed is logged and
/// does not turn the attempt into a failure.
pub trait CloneEngine: Send + Sync {
    fn clone_repository(&self, url: &str, destination: &Path) -> CloneAttemptResult;
}
