//! Utility helpers shared by built-in tools.

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thordata_tools_protocol::{FailedOperation, ToolError, ToolFailure, ToolOutput};

/// Parse JSON args into a typed struct for tool calls.
pub(super) fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    serde_json::from_value(args).map_err(|err| ToolError::InvalidArguments(err.to_string()))
}

/// Reject empty or whitespace-only required fields.
pub(super) fn require_non_empty(value: &str, field: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::InvalidArguments(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}

/// Turn a delegate failure into an in-band [`ToolOutput::Error`].
///
/// Any other error passes through unchanged.
pub(super) fn report_delegate_failure(
    tool: &str,
    result: Result<ToolOutput, ToolError>,
    operation: impl FnOnce() -> FailedOperation,
) -> Result<ToolOutput, ToolError> {
    match result {
        Err(ToolError::Delegate(message)) => {
            warn!("delegate call failed (tool={tool}): {message}");
            Ok(ToolOutput::Error(ToolFailure::new(operation(), message)))
        }
        other => other,
    }
}
