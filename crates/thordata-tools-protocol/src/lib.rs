//! Result and error types shared by the Thordata tools and their callers.

mod tool;

pub use tool::ToolError;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Result of a single tool invocation.
///
/// Callers match on the variant instead of inspecting the runtime type of the
/// payload. [`ToolOutput::into_value`] renders the variant into the JSON shape
/// agent frameworks expect.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Text payload, such as page HTML or a proxied response body.
    Text(String),
    /// Binary payload, such as a page screenshot.
    Binary(BinaryPayload),
    /// Structured payload passed through from the service.
    Structured(Value),
    /// The external service failed; carried in-band.
    Error(ToolFailure),
}

impl ToolOutput {
    /// Whether this output carries a delegate failure.
    pub fn is_error(&self) -> bool {
        matches!(self, ToolOutput::Error(_))
    }

    /// Borrow the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Render the output for an agent framework.
    pub fn into_value(self) -> Value {
        match self {
            ToolOutput::Text(text) => Value::String(text),
            ToolOutput::Binary(payload) => payload.to_value(),
            ToolOutput::Structured(value) => value,
            ToolOutput::Error(failure) => failure.to_value(),
        }
    }
}

/// Image formats a binary payload can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImageFormat {
    /// Portable Network Graphics.
    Png,
}

impl ImageFormat {
    /// Tag written into rendered payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
        }
    }
}

/// Raw bytes tagged with their format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryPayload {
    /// Format of `data`.
    pub format: ImageFormat,
    /// Undecoded bytes returned by the service.
    pub data: Vec<u8>,
}

impl BinaryPayload {
    /// Create a PNG payload.
    pub fn png(data: Vec<u8>) -> Self {
        Self {
            format: ImageFormat::Png,
            data,
        }
    }

    /// Standard base64 encoding of the payload bytes.
    pub fn data_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Render as `{output_format, data_base64}` for JSON transports.
    pub fn to_value(&self) -> Value {
        json!({
            "output_format": self.format.as_str(),
            "data_base64": self.data_base64(),
        })
    }
}

/// Operation that failed, with the input needed to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailedOperation {
    /// SERP search.
    Search { query: String, engine: String },
    /// Page scrape (plain or universal).
    Scrape { url: String },
    /// Request through the proxy network.
    Request { url: String },
}

/// A delegate failure reported in-band to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    /// The failed operation and its echoed input.
    pub operation: FailedOperation,
    /// Message from the external service or client.
    pub message: String,
}

impl ToolFailure {
    /// Create a failure for an operation.
    pub fn new(operation: FailedOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// Render the failure: searches become a mapping, everything else an
    /// error-prefixed string.
    pub fn to_value(&self) -> Value {
        match &self.operation {
            FailedOperation::Search { query, engine } => json!({
                "error": self.message,
                "query": query,
                "engine": engine,
            }),
            FailedOperation::Scrape { .. } | FailedOperation::Request { .. } => {
                Value::String(self.to_string())
            }
        }
    }
}

impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.operation {
            FailedOperation::Search { query, engine } => {
                write!(f, "Error searching {query:?} on {engine}: {}", self.message)
            }
            FailedOperation::Scrape { url } => write!(f, "Error scraping {url}: {}", self.message),
            FailedOperation::Request { url } => {
                write!(f, "Error requesting {url}: {}", self.message)
            }
        }
    }
}
