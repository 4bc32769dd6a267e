//! Thordata SERP, scraping and proxy tools for LLM agents.
//!
//! Each tool validates a typed input, forwards it to an injected
//! [`ServiceClient`], and normalizes the response into a
//! [`ToolOutput`](thordata_tools_protocol::ToolOutput).

pub mod builtins;
pub mod client;
pub mod registry;
pub mod tool;
pub mod truncate;

/// Built-in tools and registry helpers.
pub use builtins::{
    ProxyRequestInput, ProxyRequestTool, ScrapeInput, ScrapeTool, SearchEngine, SerpSearchInput,
    SerpSearchTool, UniversalScrapeInput, UniversalScrapeTool, register_thordata_tools,
    thordata_tool_registry,
};
/// External service client contract.
pub use client::{
    ClientError, ClientFactory, FetchBody, FetchRequest, OutputFormat, ProxyConfig,
    ProxyResponse, SerpRequest, ServiceClient,
};
/// Tool registry type.
pub use registry::ToolRegistry;
/// Tool trait and spec type.
pub use tool::{Tool, ToolSpec};
/// Output truncation helpers.
pub use truncate::{TRUNCATION_MARKER, decode_lossy, truncate_chars, truncate_with_marker};
