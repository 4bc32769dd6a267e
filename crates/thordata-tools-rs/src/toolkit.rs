//! Process-wide wiring of credentials, settings and tools.

use log::info;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use thordata_tools::{ClientError, ClientFactory, ServiceClient, ToolRegistry, ToolSpec};
use thordata_tools_config::{ClientCredentials, ConfigError, ToolsConfig};
use thordata_tools_protocol::{ToolError, ToolOutput};

/// Errors raised while assembling a [`Toolkit`].
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create service client: {0}")]
    Client(#[from] ClientError),
}

/// The four Thordata tools sharing one client and one set of credentials.
///
/// Cloning is cheap; clones share the same registry and client.
#[derive(Clone)]
pub struct Toolkit {
    credentials: Arc<ClientCredentials>,
    config: Arc<ToolsConfig>,
    registry: ToolRegistry,
}

impl Toolkit {
    /// Build a toolkit, creating the client through `factory`.
    pub fn new(
        credentials: ClientCredentials,
        config: ToolsConfig,
        factory: &impl ClientFactory,
    ) -> Result<Self, ToolkitError> {
        let client = factory.connect(&credentials)?;
        Ok(Self::with_client(credentials, config, client))
    }

    /// Build a toolkit around an existing client.
    pub fn with_client(
        credentials: ClientCredentials,
        config: ToolsConfig,
        client: Arc<dyn ServiceClient>,
    ) -> Self {
        let registry =
            thordata_tools::thordata_tool_registry(client, &config, credentials.proxy.clone());
        info!(
            "thordata toolkit ready (tools={}, geo_targeting={})",
            registry.list().len(),
            credentials.proxy.is_some()
        );
        Self {
            credentials: Arc::new(credentials),
            config: Arc::new(config),
            registry,
        }
    }

    /// Build a toolkit from environment credentials and the default config file.
    ///
    /// Fails before any tool exists when the scraper token is missing.
    pub fn from_env(factory: &impl ClientFactory) -> Result<Self, ToolkitError> {
        let credentials = ClientCredentials::from_env()?;
        let config = ToolsConfig::load_default()?;
        Self::new(credentials, config, factory)
    }

    pub fn credentials(&self) -> &ClientCredentials {
        &self.credentials
    }

    pub fn config(&self) -> &ToolsConfig {
        &self.config
    }

    /// Registry holding the four tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Tool specs sorted by name.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.registry.specs()
    }

    /// Invoke a tool by name.
    pub fn invoke(&self, name: &str, args: Value) -> Result<ToolOutput, ToolError> {
        self.registry.invoke(name, args)
    }
}
