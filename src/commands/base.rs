//! Base types and traits for the command pattern

use crate::config::Config;
use crate::logger::Logger;
use crate::utils::CancelFlag;
use anyhow::Result;

/// Context passed to all commands containing shared configuration and services
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// The resolved configuration (file, then command line overrides)
    pub config: Config,
    /// Console and file logger shared by every stage
    pub logger: Logger,
    /// Raised on Ctrl-C; long running commands stop at the next safe point
    pub cancel: CancelFlag,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
