//! Tool trait definition and metadata spec.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thordata_tools_protocol::{ToolError, ToolOutput};

/// Tool metadata spec for discovery and schema presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON schema for tool arguments.
    pub args_schema: Value,
}

/// Interface for agent-callable tools.
///
/// Invocation is blocking. Configuration and argument errors are returned as
/// `Err`; failures of the external service come back as
/// [`ToolOutput::Error`] so an agent loop can observe them.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Return the tool name.
    fn name(&self) -> &str;
    /// Return the tool description.
    fn description(&self) -> &str;
    /// Return the JSON schema for tool arguments.
    fn args_schema(&self) -> Value;

    /// Invoke the tool with JSON arguments.
    fn invoke(&self, args: Value) -> Result<ToolOutput, ToolError>;

    /// Async entry point for frameworks that only call tools asynchronously.
    ///
    /// Always fails with [`ToolError::AsyncUnsupported`] instead of blocking
    /// inside an async context.
    async fn invoke_async(&self, _args: Value) -> Result<ToolOutput, ToolError> {
        Err(ToolError::AsyncUnsupported(self.name().to_string()))
    }

    /// Build a `ToolSpec` describing this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            args_schema: self.args_schema(),
        }
    }
}
