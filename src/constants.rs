//! Central constants for the clone-git-repo application

/// Default values for git operations
pub mod git {
    /// Name of the remote created by `git clone`
    pub const REMOTE_NAME: &str = "origin";

    /// Environment variable that stops git from prompting for credentials
    pub const TERMINAL_PROMPT_ENV: &str = "GIT_TERMINAL_PROMPT";

    /// Replacement shown in place of a password or token
    pub const REDACTED: &str = "***";
}

/// Retry behaviour of the clone loop
pub mod retry {
    /// Number of additional attempts after the initial failed clone
    pub const MAX_RETRIES: u32 = 3;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "clone-git-repo.yaml";

    /// Default CSV file listing the repositories to clone
    pub const DEFAULT_CSV_FILE: &str = "repositories.csv";

    /// Default directory receiving the clones
    pub const DEFAULT_CLONE_DIR: &str = "clonedir";

    /// Default directory receiving the result file
    pub const DEFAULT_RESULT_DIR: &str = ".";

    /// Environment variable consulted for the token when no other source sets it
    pub const TOKEN_ENV: &str = "GIT_CLONE_TOKEN";
}

/// Default values for logging
pub mod logging {
    /// Default log directory
    pub const DEFAULT_LOG_DIR: &str = "logs";

    /// Default maximum size of a log file before it is rotated
    pub const DEFAULT_LOG_MAX_SIZE: u64 = 10 * 1024 * 1024;

    /// Prefix of the daily log file name
    pub const LOG_FILE_PREFIX: &str = "clone-git-repo";
}

/// Report output
pub mod report {
    /// Fixed name of the result file
    pub const RESULT_FILE: &str = "clone-git-repo-result.csv";

    /// Column headers shared by the table and the result file
    pub const HEADERS: [&str; 4] = ["Repository", "Cloned", "Branches", "Tags"];
}
