//! Built-in Thordata tools.

mod proxy;
mod scrape;
mod serp;
#[cfg(test)]
pub(crate) mod test_support;
mod universal;
mod utils;

use crate::{ServiceClient, ToolRegistry};
use log::info;
use std::sync::Arc;
use thordata_tools_config::{ProxyCredentials, ToolsConfig};

pub use proxy::{ProxyRequestInput, ProxyRequestTool};
pub use scrape::{ScrapeInput, ScrapeTool};
pub use serp::{SearchEngine, SerpSearchInput, SerpSearchTool};
pub use universal::{UniversalScrapeInput, UniversalScrapeTool};

/// Register the four Thordata tools with the provided registry.
///
/// Every tool shares `client`. `proxy_credentials` enables geo-targeting for
/// the proxy tool.
pub fn register_thordata_tools(
    registry: &ToolRegistry,
    client: Arc<dyn ServiceClient>,
    config: &ToolsConfig,
    proxy_credentials: Option<ProxyCredentials>,
) {
    registry.register(Arc::new(
        SerpSearchTool::new(client.clone()).with_defaults(config.search.clone()),
    ));
    registry.register(Arc::new(
        ScrapeTool::new(client.clone()).with_max_chars(config.limits.scrape_max_chars),
    ));
    registry.register(Arc::new(
        UniversalScrapeTool::new(client.clone())
            .with_max_chars(config.limits.universal_max_chars),
    ));
    registry.register(Arc::new(
        ProxyRequestTool::new(client)
            .with_credentials(proxy_credentials)
            .with_limits(&config.limits),
    ));
    info!("registered thordata tools");
}

/// Build a registry pre-populated with the Thordata tools.
pub fn thordata_tool_registry(
    client: Arc<dyn ServiceClient>,
    config: &ToolsConfig,
    proxy_credentials: Option<ProxyCredentials>,
) -> ToolRegistry {
    let registry = ToolRegistry::new();
    register_thordata_tools(&registry, client, config, proxy_credentials);
    registry
}
