//! Bounded retry loop around a clone engine
//!
//! One [`RetryController::run`] call processes one repository:
//!
//! ```text
//! Attempting --Success--> Succeeded
//!     |
//!   Failure (error count + 1)
//!     |-- count > max_retries ------------> RetriesExhausted
//!     |-- AuthenticationRequired --> inject credentials, attempt again
//!     |-- DirectoryExists ---------> wipe destination, attempt again
//!     `-- no recovery available ---------> Unrecoverable
//! ```
//!
//! The error count is shared by all failure kinds. Cancellation is checked
//! before every attempt and ends the loop in `Cancelled`. A repository whose
//! name is not a plain directory name is `Unrecoverable` before any attempt.

pub mod recovery;

use crate::config::{Credentials, RepositorySpec, RetryConfig};
use crate::constants;
use crate::git::{
    CloneAttemptResult, CloneEngine, CloneError, ClonedRefs, ErrorKind, classify, redact_url,
};
use crate::logger::Logger;
use crate::utils::CancelFlag;
use std::path::Path;

pub use recovery::{inject_credentials, wipe_and_retry};

/// Limits of the retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Failed attempts tolerated after the first one
    pub max_retries: u32,
    /// Re-attempt the unchanged clone when no recovery action applies
    pub retry_unknown: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: constants::retry::MAX_RETRIES,
            retry_unknown: false,
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            retry_unknown: config.retry_unknown,
            ..Self::default()
        }
    }
}

/// Where the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    Succeeded,
    RetriesExhausted,
    Unrecoverable,
    Cancelled,
}

/// Final result of processing one repository
#[derive(Debug)]
pub struct RetryOutcome {
    pub state: TerminalState,
    /// Clone attempts actually made, the initial one included
    pub attempts: u32,
    /// Present only when `state` is `Succeeded`
    pub refs: Option<ClonedRefs>,
    pub last_error: Option<CloneError>,
}

impl RetryOutcome {
    pub fn is_success(&self) -> bool {
        self.state == TerminalState::Succeeded
    }

    fn failed(state: TerminalState, attempts: u32, error: Option<CloneError>) -> Self {
        Self {
            state,
            attempts,
            refs: None,
            last_error: error,
        }
    }
}

enum Recovery<'a> {
    InjectCredentials(&'a Credentials),
    WipeAndRetry,
    RetryUnchanged,
}

/// Drives clone attempts and recovery actions for one repository at a time
pub struct RetryController<E: CloneEngine> {
    engine: E,
    credentials: Option<Credentials>,
    policy: RetryPolicy,
    logger: Logger,
    cancel: CancelFlag,
}

impl<E: CloneEngine> RetryController<E> {
    pub fn new(engine: E, logger: Logger) -> Self {
        Self {
            engine,
            credentials: None,
            policy: RetryPolicy::default(),
            logger,
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }


    fn recovery_for(&self, kind: ErrorKind) -> Option<Recovery<'_>> {
        match kind {
            ErrorKind::AuthenticationRequired => {
                self.credentials.as_ref().map(Recovery::InjectCredentials)
            }
            ErrorKind::DirectoryExists => Some(Recovery::WipeAndRetry),
            ErrorKind::Unknown => self.policy.retry_unknown.then_some(Recovery::RetryUnchanged),
        }
    }

    fn recover(&self, recovery: Recovery<'_>, url: &str, destination: &Path) -> CloneAttemptResult {
        match recovery {
            Recovery::InjectCredentials(credentials) => {
                inject_credentials(&self.engine, url, destination, credentials)
            }
            Recovery::WipeAndRetry => wipe_and_retry(&self.engine, url, destination),
            Recovery::RetryUnchanged => self.engine.clone_repository(url, destination),
        }
    }

    /// Clone `repo` into `destination`, recovering from known failures
    pub fn run(&self, repo: &RepositorySpec, destination: &Path) -> RetryOutcome {
        let label = repo.name();
        let url = repo.url.as_str();

        if self.cancel.is_cancelled() {
            self.logger.warn(&label, "Cancelled before cloning");
            return RetryOutcome::failed(TerminalState::Cancelled, 0, None);
        }

        // The destination is wiped on DirectoryExists, so it must be this repository's own
        if !repo.has_usable_name() {
            let error = CloneError::InvalidUrl {
                url: redact_url(url),
                reason: format!("'{label}' cannot be used as a clone directory name"),
            };
            self.logger
                .error(&label, &format!("Error cloning repository: {error}"));
            return RetryOutcome::failed(TerminalState::Unrecoverable, 0, Some(error));
        }

        let mut attempts = 1;
        let mut error_count = 0;
        let mut result = self.engine.clone_repository(url, destination);

        loop {
            let error = match result {
                Ok(refs) => {
                    return RetryOutcome {
                        state: TerminalState::Succeeded,
                        attempts,
                        refs: Some(refs),
                        last_error: None,
                    };
                }
                Err(error) => error,
            };

            error_count += 1;
            let kind = classify(&error);
            self.logger.warn(
                &label,
                &format!("Clone attempt {attempts} failed ({kind}): {error}"),
            );

            if error_count > self.policy.max_retries {
                self.logger.error(
                    &label,
                    &format!(
                        "Error cloning repository {}: giving up after {attempts} attempts: {error}",
                        redact_url(url)
                    ),
                );
                return RetryOutcome::failed(TerminalState::RetriesExhausted, attempts, Some(error));
            }

            let Some(recovery) = self.recovery_for(kind) else {
                let reason = match kind {
                    ErrorKind::AuthenticationRequired => {
                        "authentication required but no credentials are configured"
                    }
                    _ => "no recovery action applies",
                };
                self.logger.error(
                    &label,
                    &format!(
                        "Error cloning repository {}: {reason}: {error}",
                        redact_url(url)
                    ),
                );
                return RetryOutcome::failed(TerminalState::Unrecoverable, attempts, Some(error));
            };

            if self.cancel.is_cancelled() {
                self.logger.warn(&label, "Cancelled, not retrying");
                return RetryOutcome::failed(TerminalState::Cancelled, attempts, Some(error));
            }

            match &recovery {
                Recovery::InjectCredentials(_) => {
                    self.logger.info(&label, "Retrying with configured credentials")
                }
                Recovery::WipeAndRetry => self.logger.info(
                    &label,
                    &format!("Removing {} and retrying", destination.display()),
                ),
                Recovery::RetryUnchanged => self.logger.info(&label, "Retrying clone"),
            }

            attempts += 1;
            result = self.recover(recovery, url, destination);
        }
    }
}
