//! Git clone engine backed by the system `git` binary
//!
//! A clone runs in three steps:
//!
//! 1. transfer (`git clone --progress`), the only step whose failure fails
//!    the attempt;
//! 2. enumeration of `origin` remote-tracking branches and tags;
//! 3. pull and force-checkout of every enumerated branch.
//!
//! Failures are turned into a [`CloneError`] variant right here, where git's
//! output is available, so callers classify them by variant only.

use super::common::{git_command, label_for, run_git};
use super::credentials::{redact_url, scrub_secret, strip_credentials};
use super::engine::{CloneAttemptResult, CloneEngine, ClonedRefs};
use super::error::CloneError;
use super::refs;
use crate::constants::git::REMOTE_NAME;
use crate::logger::Logger;
use crate::utils::{CancelFlag, is_occupied};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Stdio;

/// Fragments of git's stderr meaning the remote wants (other) credentials
const AUTH_FAILURE_MARKERS: &[&str] = &[
    "authentication failed",
    "authentication required",
    "could not read username",
    "could not read password",
    "terminal prompts disabled",
    "invalid username or password",
    "http basic: access denied",
    "the requested url returned error: 401",
];

const DIRECTORY_EXISTS_MARKER: &str = "already exists and is not an empty directory";

/// Build the error for a failed `git clone` from its stderr
pub(crate) fn failure_from_clone_output(stderr: &str, url: &str, destination: &Path) -> CloneError {
    let lower = stderr.to_lowercase();

    if AUTH_FAILURE_MARKERS.iter().any(|m| lower.contains(m)) {
        return CloneError::AuthenticationRequired {
            url: redact_url(url),
        };
    }

    if lower.contains(DIRECTORY_EXISTS_MARKER) {
        return CloneError::DirectoryExists {
            path: destination.to_path_buf(),
        };
    }

    CloneError::Git {
        operation: "clone",
        message: summarize_stderr(&scrub_secret(stderr, url)),
    }
}

/// The diagnostic lines of git's stderr, without progress noise
fn summarize_stderr(stderr: &str) -> String {
    let lines: Vec<&str> = stderr
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let diagnostics: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| {
            line.starts_with("fatal:") || line.starts_with("error:") || line.starts_with("remote:")
        })
        .collect();

    if !diagnostics.is_empty() {
        diagnostics.join("; ")
    } else if let Some(last) = lines.last() {
        (*last).to_string()
    } else {
        "git exited with a non-zero status".to_string()
    }
}

/// Read `reader` to the end, handing over every `\r`- or `\n`-terminated segment
///
/// git redraws transfer progress with a bare `\r`, so splitting on newlines
/// alone would hold each progress phase back until it completes.
fn for_each_segment<R: BufRead>(
    reader: &mut R,
    mut on_segment: impl FnMut(&[u8]),
) -> std::io::Result<()> {
    let mut segment = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let len = buf.len();
        for &byte in buf {
            segment.push(byte);
            if byte == b'\r' || byte == b'\n' {
                on_segment(&segment);
                segment.clear();
            }
        }
        reader.consume(len);
    }

    if !segment.is_empty() {
        on_segment(&segment);
    }
    Ok(())
}

/// Clone engine running `git` as a child process
#[derive(Debug, Clone)]
pub struct GitCloneEngine {
    logger: Logger,
    progress: bool,
    cancel: CancelFlag,
}

impl GitCloneEngine {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            progress: true,
            cancel: CancelFlag::new(),
        }
    }

    /// Forward git transfer progress to the logger
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Stop checking out branches once `cancel` is raised
    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run `git clone`, streaming stderr to the logger and keeping it for diagnosis
    fn transfer(&self, label: &str, url: &str, destination: &Path) -> Result<(), CloneError> {
        let mut child = git_command(None)
            .arg("clone")
            .arg("--progress")
            .arg(url)
            .arg(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(CloneError::Spawn)?;

        let mut captured = String::new();
        if let Some(stderr) = child.stderr.take() {
            let mut reader = BufReader::new(stderr);
            let read = for_each_segment(&mut reader, |segment| {
                let text = scrub_secret(&String::from_utf8_lossy(segment), url);
                let line = text.trim();
                if self.progress && !line.is_empty() {
                    self.logger.progress(label, line);
                }
                captured.push_str(&text);
            });
            if let Err(e) = read {
                self.logger
                    .warn(label, &format!("Could not read git output: {e}"));
            }
        }

        let status = child.wait().map_err(CloneError::Spawn)?;
        if status.success() {
            Ok(())
        } else {
            Err(failure_from_clone_output(&captured, url, destination))
        }
    }

    fn enumerate(&self, label: &str, destination: &Path) -> ClonedRefs {
        let branches = refs::remote_branches(destination).unwrap_or_else(|e| {
            self.logger
                .error(label, &format!("Error getting branches: {e}"));
            Vec::new()
        });
        self.logger.info(
            label,
            &format!(
                "Total branch(es): {}: {}",
                branches.len(),
                branches.join(", ")
            ),
        );

        let tags = refs::tags(destination).unwrap_or_else(|e| {
            self.logger.error(label, &format!("Error getting tags: {e}"));
            Vec::new()
        });
        self.logger.info(
            label,
            &format!("Total tag(s): {}: {}", tags.len(), tags.join(", ")),
        );

        ClonedRefs { branches, tags }
    }
}

impl CloneEngine for GitCloneEngine {
    fn clone_repository(&self, url: &str, destination: &Path) -> CloneAttemptResult {
        let label = label_for(destination);

        if is_occupied(destination) {
            return Err(CloneError::DirectoryExists {
                path: destination.to_path_buf(),
            });
        }

        self.logger.info(
            &label,
            &format!(
                "Cloning {} into {}",
                redact_url(url),
                destination.display()
            ),
        );
        self.transfer(&label, url, destination)?;
        self.logger.success(
            &label,
            &format!("Repository cloned to {}", destination.display()),
        );

        let cloned = self.enumerate(&label, destination);

        let checked_out = refs::checkout_all_branches(
            destination,
            &cloned.branches,
            &self.logger,
            &label,
            &self.cancel,
        );
        self.logger.info(
            &label,
            &format!(
                "Checked out {checked_out} of {} branch(es)",
                cloned.branches.len()
            ),
        );

        // Keep the token out of .git/config once the branches are in place
        if let Some(clean_url) = strip_credentials(url)
            && let Err(e) = run_git(
                destination,
                &["remote", "set-url", REMOTE_NAME, clean_url.as_str()],
                "remote set-url",
            )
        {
            self.logger
                .warn(&label, &format!("Could not remove credentials from remote: {e}"));
        }

        Ok(cloned)
    }
}
