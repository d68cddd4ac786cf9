//! Common test support utilities and fixtures
//!
//! Source repositories are created locally and cloned through `file://` URLs
//! so no test needs network access.

#![allow(dead_code)]

use clone_git_repo::{commands::CommandContext, config::Config};
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tempfile::TempDir;

/// A test workspace: source repositories, a clone root and an output directory
pub struct Workspace {
    pub root: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        Self { root }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn sources(&self) -> PathBuf {
        self.path().join("sources")
    }

    pub fn clone_dir(&self) -> PathBuf {
        self.path().join("clonedir")
    }

    pub fn csv_file(&self) -> PathBuf {
        self.path().join("repositories.csv")
    }

    /// Create a source repository with `main` and `develop` branches and a `v1.0` tag
    pub fn source_repo(&self, name: &str) -> String {
        let path = self.sources().join(name);
        init_source_repo(&path).expect("Failed to initialize source repo");
        file_url(&path)
    }

    /// Write the repository list with a header row
    pub fn write_csv(&self, urls: &[&str]) {
        let mut content = String::from("url\n");
        for url in urls {
            content.push_str(url);
            content.push('\n');
        }
        fs::write(self.csv_file(), content).expect("Failed to write repository list");
    }

    /// Configuration pointing every path into the workspace
    pub fn config(&self) -> Config {
        let mut config = Config::new();
        config.paths.csv_file = self.csv_file().to_string_lossy().to_string();
        config.paths.clone_dir = self.clone_dir().to_string_lossy().to_string();
        config.paths.result_dir = self.path().join("out").to_string_lossy().to_string();
        config.logging.log_dir = self.path().join("logs").to_string_lossy().to_string();
        config.logging.progress = false;
        config
    }

    pub fn context(&self) -> CommandContext {
        CommandContext {
            config: self.config(),
            ..Default::default()
        }
    }
}

pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

fn git(path: &Path, args: &[&str]) -> std::io::Result<()> {
    let output = Command::new("git").args(args).current_dir(path).output()?;
    if output.status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        )))
    }
}

/// Initialize a git repository with two branches and one tag
pub fn init_source_repo(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;

    git(path, &["init"])?;
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(path, &["config", "user.name", "Test User"])?;
    git(path, &["config", "user.email", "test@example.com"])?;

    fs::write(path.join("README.md"), "# Test Repository")?;
    git(path, &["add", "."])?;
    git(path, &["commit", "-m", "Initial commit"])?;
    git(path, &["tag", "v1.0"])?;

    git(path, &["checkout", "-b", "develop"])?;
    fs::write(path.join("CHANGELOG.md"), "- work in progress")?;
    git(path, &["add", "."])?;
    git(path, &["commit", "-m", "Start develop"])?;
    git(path, &["checkout", "main"])?;

    Ok(())
}

/// Local branch names of a clone
pub fn local_branches(path: &Path) -> Vec<String> {
    let output = Command::new("git")
        .args(["for-each-ref", "--format=%(refname:short)", "refs/heads/"])
        .current_dir(path)
        .output()
        .expect("Failed to list branches");
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
