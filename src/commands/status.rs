//! Status command implementation

use super::{Command, CommandContext};
use crate::report::{RepoStatus, StatusRecorder, print_status_table};
use crate::utils::read_repository_urls;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::Path;

/// Status command: report what is on disk for every listed repository
pub struct StatusCommand {
    pub json: bool,
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let config = &context.config;
        let repositories = read_repository_urls(Path::new(&config.paths.csv_file))?;

        if repositories.is_empty() {
            println!(
                "{}",
                format!("No repositories found in {}", config.paths.csv_file).yellow()
            );
            return Ok(());
        }

        let clone_dir = config.clone_dir();
        let mut recorder = StatusRecorder::new();
        for repo in &repositories {
            recorder.record(RepoStatus::inspect(&repo.target_dir(&clone_dir)));
        }

        print_status_table(recorder.statuses());
        if self.json {
            println!("{}", serde_json::to_string_pretty(recorder.statuses())?);
        }

        Ok(())
    }
}
