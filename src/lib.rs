//! clone-git-repo - bulk clone a list of git repositories with automatic recovery

pub mod commands;
pub mod config;
pub mod constants;
pub mod git;
pub mod logger;
pub mod report;
pub mod retry;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Config, Credentials, RepositorySpec};
pub use git::{CloneEngine, CloneError, ClonedRefs, ErrorKind, GitCloneEngine};
pub use logger::Logger;
pub use report::{RepoStatus, StatusRecorder};
pub use retry::{RetryController, RetryOutcome, RetryPolicy, TerminalState};
pub use utils::CancelFlag;
