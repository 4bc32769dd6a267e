//! Service credentials sourced from the environment.

use crate::ConfigError;
use log::debug;
use std::fmt;

/// Token used for SERP and universal scraping requests.
pub const ENV_SCRAPER_TOKEN: &str = "THORDATA_SCRAPER_TOKEN";
/// Public API token.
pub const ENV_PUBLIC_TOKEN: &str = "THORDATA_PUBLIC_TOKEN";
/// Public API key.
pub const ENV_PUBLIC_KEY: &str = "THORDATA_PUBLIC_KEY";
/// Proxy account username.
pub const ENV_USERNAME: &str = "THORDATA_USERNAME";
/// Proxy account password.
pub const ENV_PASSWORD: &str = "THORDATA_PASSWORD";

/// Credentials shared read-only by every tool in a process.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// Scraper token (always present).
    pub scraper_token: String,
    /// Public token, empty when unset.
    pub public_token: String,
    /// Public key, empty when unset.
    pub public_key: String,
    /// Proxy account, present only when both username and password are set.
    pub proxy: Option<ProxyCredentials>,
}

/// Username/password pair for the proxy network.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyCredentials {
    pub username: String,
    pub password: String,
}

impl ClientCredentials {
    /// Create credentials with only a scraper token.
    pub fn new(scraper_token: impl Into<String>) -> Self {
        Self {
            scraper_token: scraper_token.into(),
            public_token: String::new(),
            public_key: String::new(),
            proxy: None,
        }
    }

    /// Attach proxy account credentials.
    pub fn with_proxy(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.proxy = Some(ProxyCredentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. A username without a password (or
    /// the reverse) leaves `proxy` unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let scraper_token =
            read(ENV_SCRAPER_TOKEN).ok_or(ConfigError::MissingCredential(ENV_SCRAPER_TOKEN))?;
        let proxy = match (read(ENV_USERNAME), read(ENV_PASSWORD)) {
            (Some(username), Some(password)) => Some(ProxyCredentials { username, password }),
            (None, None) => None,
            _ => {
                debug!("ignoring incomplete proxy credentials");
                None
            }
        };

        Ok(Self {
            scraper_token,
            public_token: read(ENV_PUBLIC_TOKEN).unwrap_or_default(),
            public_key: read(ENV_PUBLIC_KEY).unwrap_or_default(),
            proxy,
        })
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("scraper_token", &"[REDACTED]")
            .field("public_token_set", &!self.public_token.is_empty())
            .field("public_key_set", &!self.public_key.is_empty())
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl fmt::Debug for ProxyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
