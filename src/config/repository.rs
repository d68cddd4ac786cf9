//! Repository input records

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One repository to process, as read from the input list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySpec {
    pub url: String,
}

impl RepositorySpec {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Last path segment of the URL, used as the clone directory name
    ///
    /// Handles scp-like remotes (`git@host:repo.git`) as well as regular URLs.
    /// The name is kept verbatim, so a `.git` suffix stays part of it.
    pub fn name(&self) -> String {
        let trimmed = self.url.trim().trim_end_matches('/');
        let tail = match trimmed.rfind('/') {
            Some(idx) => &trimmed[idx + 1..],
            None => match trimmed.rfind(':') {
                Some(idx) => &trimmed[idx + 1..],
                None => trimmed,
            },
        };

        if tail.is_empty() {
            trimmed.to_string()
        } else {
            tail.to_string()
        }
    }

    /// Whether [`name`](Self::name) is a single plain directory name
    ///
    /// `.`, `..`, empty names and names holding a path separator would make the
    /// destination resolve outside `<clone_root>/<name>`.
    pub fn has_usable_name(&self) -> bool {
        let name = self.name();
        !(name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']))
    }

    /// Directory the repository is materialized in: `<clone_root>/<name>`
    pub fn target_dir(&self, clone_root: &Path) -> PathBuf {
        clone_root.join(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_https_url() {
        let repo = RepositorySpec::new("https://example.com/org/repoA");
        assert_eq!(repo.name(), "repoA");
    }

    #[test]
    fn test_name_keeps_git_suffix() {
        let repo = RepositorySpec::new("https://github.com/org/tool.git");
        assert_eq!(repo.name(), "tool.git");
    }

    #[test]
    fn test_name_ignores_trailing_slash() {
        let repo = RepositorySpec::new("https://example.com/org/repoB/");
        assert_eq!(repo.name(), "repoB");
    }

    #[test]
    fn test_name_from_scp_like_url() {
        let repo = RepositorySpec::new("git@github.com:repo.git");
        assert_eq!(repo.name(), "repo.git");

        let nested = RepositorySpec::new("git@github.com:org/nested.git");
        assert_eq!(nested.name(), "nested.git");
    }

    #[test]
    fn test_usable_names() {
        assert!(RepositorySpec::new("https://example.com/org/repoA").has_usable_name());
        assert!(RepositorySpec::new("git@github.com:repo.git").has_usable_name());
        assert!(RepositorySpec::new("https://example.com/org/.hidden").has_usable_name());
    }

    #[test]
    fn test_dot_segments_are_not_usable_names() {
        for url in [
            "https://example.com/org/.",
            "https://example.com/org/..",
            "file:///srv/git/org/./",
            "",
            "https://example.com/org/a\\..",
        ] {
            assert!(!RepositorySpec::new(url).has_usable_name(), "{url}");
        }
    }

    #[test]
    fn test_target_dir_joins_clone_root() {
        let repo = RepositorySpec::new("https://example.com/org/repoA");
        assert_eq!(
            repo.target_dir(Path::new("clonedir")),
            PathBuf::from("clonedir").join("repoA")
        );
    }
}
