//! Configuration management module

pub mod credentials;
pub mod loader;
pub mod repository;
pub mod validation;

pub use credentials::Credentials;
pub use loader::{
    Config, ConfigOverrides, CredentialsConfig, LoggingConfig, PathsConfig, RetryConfig,
};
pub use repository::RepositorySpec;
pub use validation::ValidationError;
