//! Configuration schema for the Thordata tools.

use serde::{Deserialize, Serialize};

/// Root config for the tool set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ToolsConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl ToolsConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> ToolsConfigBuilder {
        ToolsConfigBuilder::new()
    }
}

/// Builder for assembling a `ToolsConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct ToolsConfigBuilder {
    config: ToolsConfig,
}

impl ToolsConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the output limits.
    pub fn limits(mut self, limits: LimitsConfig) -> Self {
        self.config.limits = limits;
        self
    }

    /// Replace the search defaults.
    pub fn search(mut self, search: SearchConfig) -> Self {
        self.config.search = search;
        self
    }

    /// Finish building.
    pub fn build(self) -> ToolsConfig {
        self.config
    }
}

/// Output size caps and the proxy timeout.
///
/// Every cap is counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Default `max_length` for the plain scrape tool.
    #[serde(default = "default_scrape_max_chars")]
    pub scrape_max_chars: usize,
    /// Fixed cap applied to universal scrape HTML.
    #[serde(default = "default_universal_max_chars")]
    pub universal_max_chars: usize,
    /// Cap applied to non-JSON proxy response bodies.
    #[serde(default = "default_proxy_max_chars")]
    pub proxy_max_chars: usize,
    /// Timeout handed to the proxy client.
    #[serde(default = "default_proxy_timeout_secs")]
    pub proxy_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            scrape_max_chars: default_scrape_max_chars(),
            universal_max_chars: default_universal_max_chars(),
            proxy_max_chars: default_proxy_max_chars(),
            proxy_timeout_secs: default_proxy_timeout_secs(),
        }
    }
}

/// Defaults for the SERP search tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Engine used when the caller does not name one.
    #[serde(default = "default_engine")]
    pub default_engine: String,
    /// Result count used when the caller does not pass one.
    #[serde(default = "default_num")]
    pub default_num: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_engine: default_engine(),
            default_num: default_num(),
        }
    }
}

/// Smallest accepted search result count.
pub const MIN_SEARCH_NUM: u32 = 1;
/// Largest accepted search result count.
pub const MAX_SEARCH_NUM: u32 = 50;

fn default_scrape_max_chars() -> usize {
    50_000
}

fn default_universal_max_chars() -> usize {
    10_000
}

fn default_proxy_max_chars() -> usize {
    50_000
}

fn default_proxy_timeout_secs() -> u64 {
    30
}

fn default_engine() -> String {
    "google".to_string()
}

fn default_num() -> u32 {
    10
}
