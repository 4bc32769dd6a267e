//! Credentials and tool settings for the Thordata tools.
//!
//! Credentials come from the process environment; tool limits and search
//! defaults come from an optional JSON5 file.

mod credentials;
mod error;
mod loader;
mod model;

/// Service credentials and the environment keys they are read from.
pub use credentials::{
    ClientCredentials, ENV_PASSWORD, ENV_PUBLIC_KEY, ENV_PUBLIC_TOKEN, ENV_SCRAPER_TOKEN,
    ENV_USERNAME, ProxyCredentials,
};
/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Default config file location.
pub use loader::default_config_path;
/// Configuration schema models.
pub use model::*;
