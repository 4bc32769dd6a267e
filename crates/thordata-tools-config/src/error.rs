//! Error types for credential and config loading.

use thiserror::Error;

/// Errors returned while loading credentials or config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required credential is absent or empty.
    #[error("{0} environment variable is required")]
    MissingCredential(&'static str),
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a config file failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Converting JSON values failed.
    #[error("failed to decode config: {0}")]
    DecodeFailed(#[from] serde_json::Error),
    /// A specific field failed validation.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
}
