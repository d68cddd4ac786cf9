//! Clone command implementation

use super::{Command, CommandContext};
use crate::config::RepositorySpec;
use crate::git::{GitCloneEngine, redact_url};
use crate::report::{RepoStatus, ResultWriter, StatusRecorder, print_status_table};
use crate::retry::{RetryController, RetryPolicy};
use crate::utils::{ensure_directory_exists, read_repository_urls};
use anyhow::{Context, Result};
use async_trait::async_trait;
use colored::*;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

const LABEL: &str = "clone-git-repo";

/// Clone command: clone every listed repository, one at a time, and report
pub struct CloneCommand {
    /// Also print the statuses as JSON
    pub json: bool,
}

impl CloneCommand {
    /// Process the repositories in input order and collect one status each
    ///
    /// Only one clone runs at a time; a repository that fails (or whose task
    /// panics) is recorded as not cloned and the batch moves on. A repository
    /// whose directory was already claimed earlier in the batch is skipped, so
    /// the wipe recovery never removes another entry's clone.
    pub async fn clone_all(
        &self,
        context: &CommandContext,
        repositories: Vec<RepositorySpec>,
    ) -> StatusRecorder {
        let config = &context.config;
        let clone_dir = config.clone_dir();

        let engine = GitCloneEngine::new(context.logger.clone())
            .with_progress(config.logging.progress)
            .with_cancel_flag(context.cancel.clone());
        let controller = Arc::new(
            RetryController::new(engine, context.logger.clone())
                .with_credentials(config.credentials())
                .with_policy(RetryPolicy::from(&config.retry))
                .with_cancel_flag(context.cancel.clone()),
        );

        let mut recorder = StatusRecorder::new();
        let mut claimed = HashSet::new();
        for repo in repositories {
            let destination = repo.target_dir(&clone_dir);
            let repo_path = destination.display().to_string();
            let label = repo.name();

            if !claimed.insert(destination.clone()) {
                context.logger.warn(
                    &label,
                    &format!(
                        "Skipping {}: {repo_path} is already used by an earlier repository",
                        redact_url(&repo.url)
                    ),
                );
                recorder.record(RepoStatus::not_cloned(repo_path));
                continue;
            }

            let controller = Arc::clone(&controller);
            let status = match tokio::task::spawn_blocking(move || {
                controller.run(&repo, &destination)
            })
            .await
            {
                Ok(outcome) => RepoStatus::finalize(repo_path, &outcome),
                Err(e) => {
                    context
                        .logger
                        .error(&label, &format!("Clone task failed: {e}"));
                    RepoStatus::not_cloned(repo_path)
                }
            };

            recorder.record(status);
        }

        recorder
    }
}

#[async_trait]
impl Command for CloneCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let config = &context.config;
        let logger = &context.logger;

        let repositories = read_repository_urls(Path::new(&config.paths.csv_file))?;
        if repositories.is_empty() {
            println!(
                "{}",
                format!("No repositories found in {}", config.paths.csv_file).yellow()
            );
            return Ok(());
        }

        let clone_dir = config.clone_dir();
        ensure_directory_exists(&clone_dir).with_context(|| {
            format!("Failed to create clone directory {}", clone_dir.display())
        })?;
        let result_writer = ResultWriter::create(&config.result_file())?;

        if config.credentials().is_none() {
            logger.warn(
                LABEL,
                "No credentials configured, repositories requiring authentication will not be cloned",
            );
        }

        println!(
            "{}",
            format!("Cloning {} repositories...", repositories.len()).green()
        );

        let recorder = self.clone_all(context, repositories).await;

        print_status_table(recorder.statuses());
        if self.json {
            println!("{}", serde_json::to_string_pretty(recorder.statuses())?);
        }

        let path = result_writer.write(recorder.statuses())?;
        logger.info(LABEL, &format!("Results written to {}", path.display()));

        if context.cancel.is_cancelled() {
            println!("{}", "Cancelled before all repositories were cloned".yellow());
        } else if recorder.failed_count() == 0 {
            println!("{}", "Done cloning repositories".green());
        } else {
            println!(
                "{}",
                format!(
                    "Completed with {} successful, {} failed",
                    recorder.cloned_count(),
                    recorder.failed_count()
                )
                .yellow()
            );
        }

        Ok(())
    }
}
