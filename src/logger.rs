//! Console and file logging for clone operations
//!
//! Every message is prefixed with a label (usually the repository name) in
//! cyan/bold so interleaved output from a long batch stays readable. When a
//! log directory is configured, the same lines are appended without color to
//! a daily log file that is rotated once it grows past the size limit.

use crate::constants;
use anyhow::{Context, Result};
use colored::*;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

/// Size-limited append-only log file
#[derive(Debug)]
struct LogFile {
    path: PathBuf,
    file: File,
    written: u64,
    max_size: u64,
}

impl LogFile {
    fn open(path: PathBuf, max_size: u64) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        let written = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            path,
            file,
            written,
            max_size,
        })
    }

    fn rotated_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".1");
        PathBuf::from(name)
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        let len = line.len() as u64 + 1;
        if self.written > 0 && self.written + len > self.max_size {
            self.rotate()?;
        }

        writeln!(self.file, "{line}")?;
        self.written += len;
        Ok(())
    }

    fn rotate(&mut self) -> std::io::Result<()> {
        self.file.flush()?;
        std::fs::rename(&self.path, self.rotated_path())?;
        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

/// Logger for clone operations with consistent formatting
///
/// Cheap to clone; clones share the same log file. `Logger::default()` logs
/// to the console only.
///
/// ## Example
///
/// ```rust,no_run
/// use clone_git_repo::Logger;
///
/// let logger = Logger::default();
/// logger.info("my-repo", "Starting clone");
/// logger.success("my-repo", "Cloned");
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    file: Option<Arc<Mutex<LogFile>>>,
    console: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            file: None,
            console: true,
        }
    }
}

impl Logger {
    /// Log to the console and to `<log_dir>/clone-git-repo-<date>.log`
    pub fn with_log_dir(log_dir: &Path, max_size: u64) -> Result<Self> {
        std::fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

        let file_name = format!(
            "{}-{}.log",
            constants::logging::LOG_FILE_PREFIX,
            chrono::Local::now().format("%Y-%m-%d")
        );
        let log_file = LogFile::open(log_dir.join(file_name), max_size)?;

        Ok(Self {
            file: Some(Arc::new(Mutex::new(log_file))),
            console: true,
        })
    }

    /// Stop echoing to the console, keeping the log file
    pub fn quiet(mut self) -> Self {
        self.console = false;
        self
    }

    /// Path of the active log file, if file logging is enabled
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.file
            .as_ref()
            .and_then(|file| file.lock().ok().map(|f| f.path.clone()))
    }

    pub fn info(&self, label: &str, msg: &str) {
        if self.console {
            println!("{} | {}", label.cyan().bold(), msg);
        }
        self.append(Level::Info, label, msg);
    }

    pub fn success(&self, label: &str, msg: &str) {
        if self.console {
            println!("{} | {}", label.cyan().bold(), msg.green());
        }
        self.append(Level::Success, label, msg);
    }

    pub fn warn(&self, label: &str, msg: &str) {
        if self.console {
            println!("{} | {}", label.cyan().bold(), msg.yellow());
        }
        self.append(Level::Warn, label, msg);
    }

    pub fn error(&self, label: &str, msg: &str) {
        if self.console {
            eprintln!("{} | {}", label.cyan().bold(), msg.red());
        }
        self.append(Level::Error, label, msg);
    }

    /// Transfer progress reported by git, console only
    pub fn progress(&self, label: &str, msg: &str) {
        if self.console {
            eprintln!("{} | {}", label.cyan().bold(), msg.dimmed());
        }
    }

    fn append(&self, level: Level, label: &str, msg: &str) {
        let Some(file) = &self.file else {
            return;
        };

        let line = format!(
            "{} [{}] {} | {}",
            chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
            level.as_str(),
            label,
            msg
        );

        // A poisoned lock or a failed write must not take the batch down
        if let Ok(mut file) = file.lock()
            && let Err(e) = file.write_line(&line)
            && self.console
        {
            eprintln!("{}", format!("Failed to write log file: {e}").red());
        }
    }
}
