//! Read-only inspection of an existing clone

use super::common::{non_empty_lines, run_git};
use super::error::CloneError;
use std::path::Path;

/// Whether `repo_dir` holds a git working tree
pub fn is_cloned(repo_dir: &Path) -> bool {
    repo_dir.join(".git").exists()
}

/// Number of lines listed by `git branch -a` (local and remote branches)
pub fn count_branches(repo_dir: &Path) -> Result<usize, CloneError> {
    let output = run_git(repo_dir, &["branch", "-a"], "branch")?;
    Ok(non_empty_lines(&output).count())
}

/// Number of tags listed by `git tag`
pub fn count_tags(repo_dir: &Path) -> Result<usize, CloneError> {
    let output = run_git(repo_dir, &["tag"], "tag")?;
    Ok(non_empty_lines(&output).count())
}
