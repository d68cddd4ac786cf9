//! Configuration validation
//!
//! Validation collects every problem found instead of stopping at the first
//! one, then folds them into a single error for the caller.

use super::Config;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The input CSV path is empty
    EmptyCsvFile,
    /// The clone root directory is empty
    EmptyCloneDir,
    /// The log size limit is zero
    ZeroLogMaxSize,
    /// A username was configured without a token
    MissingToken,
    /// A token was configured without a username
    MissingUsername,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyCsvFile => write!(f, "CSV file path cannot be empty"),
            ValidationError::EmptyCloneDir => write!(f, "Clone directory cannot be empty"),
            ValidationError::ZeroLogMaxSize => {
                write!(f, "Maximum log file size must be greater than zero")
            }
            ValidationError::MissingToken => {
                write!(f, "A username is configured but the token is missing")
            }
            ValidationError::MissingUsername => {
                write!(f, "A token is configured but the username is missing")
            }
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

/// Validates a complete configuration object
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.paths.csv_file.trim().is_empty() {
        errors.push(ValidationError::EmptyCsvFile);
    }
    if config.paths.clone_dir.trim().is_empty() {
        errors.push(ValidationError::EmptyCloneDir);
    }
    if config.logging.log_max_size == 0 {
        errors.push(ValidationError::ZeroLogMaxSize);
    }

    match (
        is_blank(&config.credentials.username),
        is_blank(&config.credentials.token),
    ) {
        (false, true) => errors.push(ValidationError::MissingToken),
        (true, false) => errors.push(ValidationError::MissingUsername),
        _ => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Convert validation errors into a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!("Configuration validation failed: {}", messages.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::new()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = Config::new();
        config.paths.csv_file = " ".to_string();
        config.paths.clone_dir = String::new();
        config.logging.log_max_size = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyCsvFile,
                ValidationError::EmptyCloneDir,
                ValidationError::ZeroLogMaxSize,
            ]
        );
    }

    #[test]
    fn test_credentials_must_be_paired() {
        let mut config = Config::new();
        config.credentials.token = Some("secret".to_string());
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::MissingUsername]
        );

        config.credentials.token = None;
        config.credentials.username = Some("alice".to_string());
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::MissingToken]
        );

        config.credentials.token = Some("secret".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_errors_to_anyhow_joins_messages() {
        let err = validation_errors_to_anyhow(vec![
            ValidationError::EmptyCsvFile,
            ValidationError::MissingToken,
        ]);
        let message = err.to_string();
        assert!(message.contains("CSV file path cannot be empty"));
        assert!(message.contains("token is missing"));
    }
}
