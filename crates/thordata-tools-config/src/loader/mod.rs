//! JSON5 config loading with schema validation.
//!
//! A config file is optional: when the default location does not exist the
//! built-in defaults apply. `load_from_path` requires the file to exist.

mod schema;


use crate::{ConfigError, ToolsConfig};
use directories::UserDirs;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename.
const DEFAULT_CONFIG_FILE: &str = "tools.json5";
/// Default config directory under the home directory.
const DEFAULT_CONFIG_DIR: &str = ".thordata";

/// Default config path under the home directory (`~/.thordata/tools.json5`).
pub fn default_config_path() -> Option<PathBuf> {
    UserDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(DEFAULT_CONFIG_DIR)
            .join(DEFAULT_CONFIG_FILE)
    })
}

impl ToolsConfig {
    /// Load a config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading config from path: {}", path.display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, &path.display().to_string())
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }

    /// Load the config at `path` if it exists, otherwise return defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load_from_path(path),
            Some(path) => {
                debug!("config file missing, using defaults (path={})", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load the config from the default location, falling back to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_optional(default_config_path().as_deref())
    }
}

fn config_from_value(value: Value, label: &str) -> Result<ToolsConfig, ConfigError> {
    schema::validate_config_schema(&value, label)?;
    let config: ToolsConfig = serde_json::from_value(value)?;
    Ok(config)
}
