//! Geo-targeted proxy request tool.

use crate::builtins::utils::{parse_args, report_delegate_failure, require_non_empty};
use crate::truncate::truncate_chars;
use crate::{ProxyConfig, ServiceClient, Tool};
use log::{debug, info};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use thordata_tools_config::{LimitsConfig, ProxyCredentials};
use thordata_tools_protocol::{FailedOperation, ToolError, ToolOutput};

/// Arguments for [`ProxyRequestTool`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyRequestInput {
    pub url: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl ProxyRequestInput {
    /// Input for a URL without geo-targeting.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    fn wants_geo_targeting(&self) -> bool {
        [&self.country, &self.state, &self.city]
            .into_iter()
            .any(|field| field.as_deref().is_some_and(|value| !value.trim().is_empty()))
    }
}

/// Tool that performs GET requests through the proxy network.
pub struct ProxyRequestTool {
    client: Arc<dyn ServiceClient>,
    credentials: Option<ProxyCredentials>,
    max_chars: usize,
    timeout: Duration,
}

impl ProxyRequestTool {
    /// Create the tool without proxy account credentials.
    pub fn new(client: Arc<dyn ServiceClient>) -> Self {
        let limits = LimitsConfig::default();
        Self {
            client,
            credentials: None,
            max_chars: limits.proxy_max_chars,
            timeout: Duration::from_secs(limits.proxy_timeout_secs),
        }
    }

    /// Set the proxy account used for geo-targeting.
    pub fn with_credentials(mut self, credentials: Option<ProxyCredentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Apply the body cap and timeout from `limits`.
    pub fn with_limits(mut self, limits: &LimitsConfig) -> Self {
        self.max_chars = limits.proxy_max_chars;
        self.timeout = Duration::from_secs(limits.proxy_timeout_secs);
        self
    }

    /// Geo-targeting config for an input.
    ///
    /// `None` when no location was requested or when no proxy account is
    /// configured; the request then goes out without geo-targeting.
    pub fn proxy_config(&self, input: &ProxyRequestInput) -> Option<ProxyConfig> {
        if !input.wants_geo_targeting() {
            return None;
        }
        let Some(credentials) = &self.credentials else {
            debug!("geo-targeting requested without proxy credentials; sending untargeted");
            return None;
        };
        Some(ProxyConfig {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            country: input.country.clone(),
            state: input.state.clone(),
            city: input.city.clone(),
        })
    }

    /// Request the URL and return the body as text.
    ///
    /// JSON bodies are re-serialized compactly; anything else is returned as
    /// text cut to the configured cap.
    pub fn run(&self, input: &ProxyRequestInput) -> Result<String, ToolError> {
        require_non_empty(&input.url, "url")?;
        let proxy = self.proxy_config(input);
        info!(
            "proxy request (url_len={}, geo_targeted={})",
            input.url.len(),
            proxy.is_some()
        );
        let response = self
            .client
            .proxied_get(&input.url, proxy.as_ref(), self.timeout)?
            .error_for_status()?;
        match response.json() {
            Ok(value) => Ok(value.to_string()),
            Err(_) => Ok(truncate_chars(response.text(), self.max_chars)),
        }
    }
}

impl Tool for ProxyRequestTool {
    fn name(&self) -> &str {
        "thordata_proxy_request"
    }

    fn description(&self) -> &str {
        "Make an HTTP request through Thordata's proxy network. \
         Supports geo-targeting by country, state, and city. \
         Use this to access content from a specific location."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The URL to request."
                },
                "country": {
                    "type": "string",
                    "description": "Country code for geo-targeting (e.g., 'us', 'de', 'jp')."
                },
                "state": {
                    "type": "string",
                    "description": "State for more specific targeting (e.g., 'california')."
                },
                "city": {
                    "type": "string",
                    "description": "City for most specific targeting (e.g., 'seattle')."
                }
            },
            "required": ["url"],
            "additionalProperties": false
        })
    }

    fn invoke(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: ProxyRequestInput = parse_args(args)?;
        let result = self.run(&input).map(ToolOutput::Text);
        report_delegate_failure(self.name(), result, || FailedOperation::Request {
            url: input.url.clone(),
        })
    }
}
