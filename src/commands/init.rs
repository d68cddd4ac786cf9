//! Init command implementation

use super::{Command, CommandContext};
use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use std::path::Path;

/// Init command for writing a configuration file populated with defaults
pub struct InitCommand {
    pub output: String,
    pub overwrite: bool,
}

#[async_trait]
impl Command for InitCommand {
    async fn execute(&self, _context: &CommandContext) -> Result<()> {
        if Path::new(&self.output).exists() && !self.overwrite {
            return Err(anyhow::anyhow!(
                "Output file '{}' already exists. Use --overwrite to replace it.",
                self.output
            ));
        }

        let config = Config::new();
        config.save(&self.output)?;

        println!(
            "{}",
            format!("Configuration saved to '{}'", self.output).green()
        );
        println!(
            "{}",
            format!(
                "List repository URLs in '{}' (first column, one header row) and run `clone-git-repo clone`",
                config.paths.csv_file
            )
            .dimmed()
        );

        Ok(())
    }
}
