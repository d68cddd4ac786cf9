use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clone_git_repo::config::ConfigOverrides;
use clone_git_repo::{CancelFlag, Logger, commands::*, config::Config, constants};
use std::path::Path;

#[derive(Parser)]
#[command(name = "clone-git-repo")]
#[command(about = "Clone a list of git repositories with automatic recovery")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Options shared by every command that reads the repository list
#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Configuration file path (defaults to clone-git-repo.yaml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// CSV file listing repository URLs in its first column
    #[arg(short = 'f', long)]
    csv_file: Option<String>,

    /// Directory the repositories are cloned into
    #[arg(short = 'd', long)]
    clone_dir: Option<String>,

    /// Username used when a repository requires authentication
    #[arg(short, long)]
    username: Option<String>,

    /// Token used when a repository requires authentication (or GIT_CLONE_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Directory for log files
    #[arg(long)]
    log_dir: Option<String>,

    /// Rotate the log file once it exceeds this many bytes
    #[arg(long)]
    log_max_size: Option<u64>,

    /// Do not show git transfer progress
    #[arg(long)]
    no_progress: bool,
}

impl ConfigArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            csv_file: self.csv_file.clone(),
            clone_dir: self.clone_dir.clone(),
            username: self.username.clone(),
            token: self.token.clone(),
            log_dir: self.log_dir.clone(),
            log_max_size: self.log_max_size,
            no_progress: self.no_progress,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Clone every repository listed in the CSV file
    Clone {
        #[command(flatten)]
        args: ConfigArgs,

        /// Also print the per-repository statuses as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what is currently cloned for every listed repository
    Status {
        #[command(flatten)]
        args: ConfigArgs,

        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Create a configuration file populated with defaults
    Init {
        /// Output file name
        #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string())]
        output: String,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Clone { args, json }) => {
            let context = build_context(&args)?;
            watch_for_interrupt(&context);
            CloneCommand { json }.execute(&context).await?;
        }
        Some(Commands::Status { args, json }) => {
            let context = build_context(&args)?;
            StatusCommand { json }.execute(&context).await?;
        }
        Some(Commands::Init { output, overwrite }) => {
            InitCommand { output, overwrite }
                .execute(&CommandContext::default())
                .await?;
        }
        None => {
            anyhow::bail!("No command provided. Use --help for usage information.");
        }
    }

    Ok(())
}

/// Resolve configuration (file, then command line) and open the log file
fn build_context(args: &ConfigArgs) -> Result<CommandContext> {
    let (path, explicit) = match &args.config {
        Some(path) => (path.as_str(), true),
        None => (constants::config::DEFAULT_CONFIG_FILE, false),
    };

    let (mut config, warning) = Config::load_or_default(path, explicit)?;
    config.apply_overrides(args.overrides());
    config.validate()?;

    let logger = Logger::with_log_dir(
        Path::new(&config.logging.log_dir),
        config.logging.log_max_size,
    )?;
    if let Some(warning) = warning {
        logger.warn("config", &warning);
    }

    Ok(CommandContext {
        config,
        logger,
        cancel: CancelFlag::new(),
    })
}

/// Raise the cancel flag on Ctrl-C so the batch stops after the current step
fn watch_for_interrupt(context: &CommandContext) {
    let cancel = context.cancel.clone();
    let logger = context.logger.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger.warn("clone-git-repo", "Interrupted, finishing the current step");
            cancel.cancel();
        }
    });
}
