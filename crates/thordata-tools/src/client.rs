//! Contract for the external Thordata service client.
//!
//! The network client itself lives outside this crate. Tools receive an
//! `Arc<dyn ServiceClient>` at construction and never build one themselves.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thordata_tools_config::ClientCredentials;
use thordata_tools_protocol::ToolError;

/// Errors reported by a [`ServiceClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be completed (network, auth, rate limit, ...).
    #[error("{0}")]
    Request(String),
    /// The service answered with a non-success HTTP status.
    #[error("HTTP status {status}")]
    Status { status: u16 },
    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<ClientError> for ToolError {
    fn from(err: ClientError) -> Self {
        ToolError::Delegate(err.to_string())
    }
}

/// Blocking client for the Thordata SERP, universal scraping and proxy APIs.
pub trait ServiceClient: Send + Sync {
    /// Run a search-engine query and return the structured SERP response.
    fn search(&self, request: &SerpRequest) -> Result<Value, ClientError>;

    /// Fetch (and optionally render) a page.
    fn fetch(&self, request: &FetchRequest) -> Result<FetchBody, ClientError>;

    /// Issue a GET through the proxy network.
    fn proxied_get(
        &self,
        url: &str,
        proxy: Option<&ProxyConfig>,
        timeout: Duration,
    ) -> Result<ProxyResponse, ClientError>;
}

/// Builds a [`ServiceClient`] from process credentials.
pub trait ClientFactory {
    /// Construct the client handle shared by every tool.
    fn connect(&self, credentials: &ClientCredentials)
    -> Result<Arc<dyn ServiceClient>, ClientError>;
}

impl<F> ClientFactory for F
where
    F: Fn(&ClientCredentials) -> Result<Arc<dyn ServiceClient>, ClientError>,
{
    fn connect(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<Arc<dyn ServiceClient>, ClientError> {
        self(credentials)
    }
}

/// Parameters forwarded to [`ServiceClient::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerpRequest {
    pub query: String,
    /// Client-recognized engine identifier.
    pub engine: String,
    pub num: u32,
    pub country: Option<String>,
    pub language: Option<String>,
    pub search_type: Option<String>,
}

/// Output shape requested from the universal scraping API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Png,
}

impl OutputFormat {
    /// Parse a format name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "html" => Some(OutputFormat::Html),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    /// Wire name of the format.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Png => "png",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters forwarded to [`ServiceClient::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub js_render: bool,
    pub output_format: OutputFormat,
    pub country: Option<String>,
    /// CSS selector to wait for; passed through uninterpreted.
    pub wait_for: Option<String>,
    pub block_resources: Option<bool>,
}

impl FetchRequest {
    /// HTML request with no optional parameters.
    pub fn html(url: impl Into<String>, js_render: bool) -> Self {
        Self {
            url: url.into(),
            js_render,
            output_format: OutputFormat::Html,
            country: None,
            wait_for: None,
            block_resources: None,
        }
    }
}

/// Body returned by [`ServiceClient::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchBody {
    Text(String),
    Bytes(Vec<u8>),
}

impl FetchBody {
    /// Convert to text, dropping invalid UTF-8 sequences.
    pub fn into_text(self) -> String {
        match self {
            FetchBody::Text(text) => text,
            FetchBody::Bytes(bytes) => crate::truncate::decode_lossy(&bytes),
        }
    }

    /// Convert to raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            FetchBody::Text(text) => text.into_bytes(),
            FetchBody::Bytes(bytes) => bytes,
        }
    }
}

/// Geo-targeting settings for a proxied request.
#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub username: String,
    pub password: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("country", &self.country)
            .field("state", &self.state)
            .field("city", &self.city)
            .finish()
    }
}

/// Response to a proxied GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ProxyResponse {
    /// Create a response from a status code and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail on non-2xx statuses.
    pub fn error_for_status(self) -> Result<Self, ClientError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
            })
        }
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<Value, ClientError> {
        serde_json::from_slice(&self.body).map_err(|err| ClientError::Decode(err.to_string()))
    }

    /// Body as text, dropping invalid UTF-8 sequences.
    pub fn text(&self) -> String {
        crate::truncate::decode_lossy(&self.body)
    }
}
