//! Config file error scenario tests

use clone_git_repo::config::{Config, ConfigOverrides};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_not_found() {
    let result = Config::load("nonexistent_config.yaml");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("nonexistent_config.yaml"));
}

#[test]
fn test_config_file_invalid_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("invalid.yaml");
    fs::write(&path, "paths: [unclosed").unwrap();

    let result = Config::load(&path.to_string_lossy());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to parse"));
}

#[test]
fn test_config_file_validation_failure() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "paths:\n  csv_file: \"\"\n").unwrap();

    let result = Config::load(&path.to_string_lossy());

    assert!(result.is_err());
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    assert!(Config::load_or_default("nonexistent_config.yaml", true).is_err());
}

#[test]
#[serial]
fn test_command_line_overrides_file_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(
        &path,
        "credentials:\n  username: from-file\n  token: file-token\npaths:\n  clone_dir: from-file\n",
    )
    .unwrap();

    let mut config = Config::load(&path.to_string_lossy()).unwrap();
    config.apply_overrides(ConfigOverrides {
        clone_dir: Some("from-cli".to_string()),
        token: Some("cli-token".to_string()),
        ..Default::default()
    });

    assert_eq!(config.paths.clone_dir, "from-cli");
    let credentials = config.credentials().unwrap();
    assert_eq!(credentials.username, "from-file");
    assert_eq!(credentials.token, "cli-token");
}
