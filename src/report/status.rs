//! Repository status records

use crate::git::inspect;
use crate::retry::RetryOutcome;
use serde::Serialize;
use std::path::Path;

/// Terminal record of one repository
///
/// A repository that was not cloned always reports zero branches and tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    pub repo_path: String,
    pub is_cloned: bool,
    pub branch_count: usize,
    pub tag_count: usize,
}

impl RepoStatus {
    /// Status of a repository that was not cloned
    pub fn not_cloned(repo_path: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            is_cloned: false,
            branch_count: 0,
            tag_count: 0,
        }
    }

    /// Build the record from the final outcome of the retry loop
    pub fn finalize(repo_path: impl Into<String>, outcome: &RetryOutcome) -> Self {
        match (&outcome.refs, outcome.is_success()) {
            (Some(refs), true) => Self {
                repo_path: repo_path.into(),
                is_cloned: true,
                branch_count: refs.branches.len(),
                tag_count: refs.tags.len(),
            },
            _ => Self::not_cloned(repo_path),
        }
    }

    /// Inspect a clone already on disk without touching the network
    ///
    /// A directory counts as cloned when it has a `.git` entry; branch and tag
    /// counts come from `git branch -a` and `git tag`, and are left at zero if
    /// git cannot list them.
    pub fn inspect(repo_path: &Path) -> Self {
        let display = repo_path.display().to_string();
        if !inspect::is_cloned(repo_path) {
            return Self::not_cloned(display);
        }

        Self {
            repo_path: display,
            is_cloned: true,
            branch_count: inspect::count_branches(repo_path).unwrap_or(0),
            tag_count: inspect::count_tags(repo_path).unwrap_or(0),
        }
    }
}

/// Collects one status per repository, in processing order
#[derive(Debug, Default)]
pub struct StatusRecorder {
    statuses: Vec<RepoStatus>,
}

impl StatusRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: RepoStatus) {
        self.statuses.push(status);
    }

    pub fn statuses(&self) -> &[RepoStatus] {
        &self.statuses
    }

    pub fn cloned_count(&self) -> usize {
        self.statuses.iter().filter(|s| s.is_cloned).count()
    }

    pub fn failed_count(&self) -> usize {
        self.statuses.len() - self.cloned_count()
    }
}
