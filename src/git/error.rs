//! Clone failures and their classification

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Recovery category of a failed clone attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The remote asked for credentials
    AuthenticationRequired,
    /// The destination directory exists and is not empty
    DirectoryExists,
    /// Anything no recovery action can fix
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::AuthenticationRequired => write!(f, "authentication required"),
            ErrorKind::DirectoryExists => write!(f, "repository already exists"),
            ErrorKind::Unknown => write!(f, "unknown error"),
        }
    }
}

/// Error produced by a single clone attempt
///
/// The variant is chosen where the failure happens, so classifying it never
/// needs to look at message text. URLs stored here are already redacted.
#[derive(Debug, Error)]
pub enum CloneError {
    #[error("authentication required for {url}")]
    AuthenticationRequired { url: String },

    #[error("repository already exists at {}", path.display())]
    DirectoryExists { path: PathBuf },

    #[error("invalid repository URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("git {operation} failed: {message}")]
    Git {
        operation: &'static str,
        message: String,
    },

    #[error("failed to execute git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CloneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CloneError::AuthenticationRequired { .. } => ErrorKind::AuthenticationRequired,
            CloneError::DirectoryExists { .. } => ErrorKind::DirectoryExists,
            CloneError::InvalidUrl { .. }
            | CloneError::Git { .. }
            | CloneError::Spawn(_)
            | CloneError::Io { .. } => ErrorKind::Unknown,
        }
    }
}

/// Map a failed attempt to its recovery category
pub fn classify(error: &CloneError) -> ErrorKind {
    error.kind()
}
