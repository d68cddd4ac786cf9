//! Common git utilities and shared helpers
//!
//! Every git invocation goes through [`git_command`] so that interactive
//! credential prompts are disabled consistently: a missing credential must
//! surface as a failure the retry loop can react to, not as a hung terminal.

use super::error::CloneError;
use crate::constants;
use std::path::Path;
use std::process::Command;

/// A `git` command with terminal prompts disabled, optionally run inside `dir`
pub fn git_command(dir: Option<&Path>) -> Command {
    let mut cmd = Command::new("git");
    cmd.env(constants::git::TERMINAL_PROMPT_ENV, "0");
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    cmd
}

/// Run git in `dir` and return its stdout
pub fn run_git(dir: &Path, args: &[&str], operation: &'static str) -> Result<String, CloneError> {
    let output = git_command(Some(dir))
        .args(args)
        .output()
        .map_err(CloneError::Spawn)?;

    if !output.status.success() {
        return Err(CloneError::Git {
            operation,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Non-empty, trimmed lines of command output
pub fn non_empty_lines(output: &str) -> impl Iterator<Item = &str> {
    output.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Label used in log lines for a destination directory
pub fn label_for(destination: &Path) -> String {
    destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| destination.display().to_string())
}
