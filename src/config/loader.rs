//! Configuration file loading and saving

use super::Credentials;
use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub csv_file: String,
    pub clone_dir: String,
    pub result_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            csv_file: constants::config::DEFAULT_CSV_FILE.to_string(),
            clone_dir: constants::config::DEFAULT_CLONE_DIR.to_string(),
            result_dir: constants::config::DEFAULT_RESULT_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub log_max_size: u64,
    /// Forward git transfer progress to the console
    pub progress: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: constants::logging::DEFAULT_LOG_DIR.to_string(),
            log_max_size: constants::logging::DEFAULT_LOG_MAX_SIZE,
            progress: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Re-attempt the plain clone after failures that have no recovery action
    pub retry_unknown: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub credentials: CredentialsConfig,
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
    pub retry: RetryConfig,
}

/// Values supplied on the command line, taking precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub csv_file: Option<String>,
    pub clone_dir: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub log_dir: Option<String>,
    pub log_max_size: Option<u64>,
    pub no_progress: bool,
}

impl Config {
    /// Create a configuration with every default applied
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{path}'"))?;

        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{path}'"))?;

        config.validate()?;

        Ok(config)
    }

    /// Load the file when it can be read, otherwise fall back to defaults
    ///
    /// Only the default config path may be missing; an explicitly requested
    /// file that cannot be read is an error. Returns the fallback warning, if
    /// any, so the caller can log it.
    pub fn load_or_default(path: &str, explicit: bool) -> Result<(Self, Option<String>)> {
        if explicit || Path::new(path).exists() {
            return Ok((Self::load(path)?, None));
        }

        let warning = format!(
            "Could not load config file '{path}', using command line arguments instead"
        );
        Ok((Self::new(), Some(warning)))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        let yaml_content = format!("---\n{yaml}");

        std::fs::write(path, yaml_content)
            .with_context(|| format!("Failed to write config file '{path}'"))?;

        Ok(())
    }

    /// Apply command line values, then the token environment fallback
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(csv_file) = overrides.csv_file {
            self.paths.csv_file = csv_file;
        }
        if let Some(clone_dir) = overrides.clone_dir {
            self.paths.clone_dir = clone_dir;
        }
        if let Some(username) = overrides.username {
            self.credentials.username = Some(username);
        }
        if let Some(token) = overrides.token {
            self.credentials.token = Some(token);
        }
        if let Some(log_dir) = overrides.log_dir {
            self.logging.log_dir = log_dir;
        }
        if let Some(log_max_size) = overrides.log_max_size {
            self.logging.log_max_size = log_max_size;
        }
        if overrides.no_progress {
            self.logging.progress = false;
        }

        if self.credentials.token.is_none()
            && let Ok(token) = std::env::var(constants::config::TOKEN_ENV)
            && !token.is_empty()
        {
            self.credentials.token = Some(token);
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Credentials for authentication recovery, when both parts are set
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.credentials.username, &self.credentials.token) {
            (Some(username), Some(token)) if !username.is_empty() && !token.is_empty() => {
                Some(Credentials::new(username.clone(), token.clone()))
            }
            _ => None,
        }
    }

    pub fn clone_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.clone_dir)
    }

    /// Full path of the fixed-name result file
    pub fn result_file(&self) -> PathBuf {
        Path::new(&self.paths.result_dir).join(constants::report::RESULT_FILE)
    }
}
