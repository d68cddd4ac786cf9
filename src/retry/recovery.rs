//! Recovery actions applied after a classified clone failure
//!
//! Each action repairs one failure mode and performs exactly one fresh clone
//! attempt. Neither classifies its own outcome; the returned result goes back
//! to the retry loop.

use crate::config::Credentials;
use crate::git::{CloneAttemptResult, CloneEngine, CloneError, inject_credentials_into_url};
use crate::utils::remove_path_if_exists;
use std::path::Path;

/// Retry the clone with `username:token@` embedded in the URL
pub fn inject_credentials<E: CloneEngine + ?Sized>(
    engine: &E,
    url: &str,
    destination: &Path,
    credentials: &Credentials,
) -> CloneAttemptResult {
    let authenticated_url = inject_credentials_into_url(url, credentials)?;
    engine.clone_repository(&authenticated_url, destination)
}

/// Delete the destination (if present) and retry the clone unchanged
pub fn wipe_and_retry<E: CloneEngine + ?Sized>(
    engine: &E,
    url: &str,
    destination: &Path,
) -> CloneAttemptResult {
    remove_path_if_exists(destination).map_err(|source| CloneError::Io {
        path: destination.to_path_buf(),
        source,
    })?;
    engine.clone_repository(url, destination)
}
