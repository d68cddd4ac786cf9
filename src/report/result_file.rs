//! Result file writer

use super::RepoStatus;
use crate::constants::report::HEADERS;
use crate::utils::csv::format_record;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// CSV sink for the batch result, opened before any repository is processed
#[derive(Debug)]
pub struct ResultWriter {
    path: PathBuf,
    file: File,
}

impl ResultWriter {
    /// Create (or truncate) the result file, creating its directory if needed
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create result directory {}", parent.display())
            })?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create result file {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write the header and one row per status
    pub fn write(self, statuses: &[RepoStatus]) -> Result<PathBuf> {
        let mut writer = BufWriter::new(self.file);
        writeln!(writer, "{}", format_record(&HEADERS))?;

        for status in statuses {
            let fields = [
                status.repo_path.clone(),
                status.is_cloned.to_string(),
                status.branch_count.to_string(),
                status.tag_count.to_string(),
            ];
            writeln!(writer, "{}", format_record(&fields))?;
        }

        writer
            .flush()
            .with_context(|| format!("Failed to write result file {}", self.path.display()))?;
        Ok(self.path)
    }
}
