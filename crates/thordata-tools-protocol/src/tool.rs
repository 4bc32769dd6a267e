/// Errors returned by tools and the tool registry.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool name was not found in registry.
    #[error("tool not found: {0}")]
    ToolNotFound(String),
    /// Tool received invalid arguments.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// The external service call failed.
    #[error("{0}")]
    Delegate(String),
    /// The tool was invoked through an async entry point.
    #[error("async invocation is not supported by tool {0}")]
    AsyncUnsupported(String),
}
