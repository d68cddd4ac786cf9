//! Git operations using system git commands for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`engine`]: the [`CloneEngine`] trait and the result of an attempt
//! - [`clone`]: [`GitCloneEngine`], transfer plus branch/tag enumeration and checkout
//! - [`refs`]: reference listing and per-branch checkout inside a clone
//! - [`error`]: [`CloneError`], [`ErrorKind`] and [`classify`]
//! - [`credentials`]: credential injection and URL redaction
//! - [`inspect`]: read-only checks on an existing clone
//! - [`common`]: the shared `git` command builder

pub mod clone;
pub mod common;
pub mod credentials;
pub mod engine;
pub mod error;
pub mod inspect;
pub mod refs;

pub use clone::GitCloneEngine;
pub use credentials::{inject_credentials_into_url, redact_url, strip_credentials};
pub use engine::{CloneAttemptResult, CloneEngine, ClonedRefs};
pub use error::{CloneError, ErrorKind, classify};
