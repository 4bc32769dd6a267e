//! Plain HTML scrape tool.

use crate::builtins::utils::{parse_args, report_delegate_failure, require_non_empty};
use crate::truncate::truncate_with_marker;
use crate::{FetchRequest, ServiceClient, Tool};
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use thordata_tools_config::LimitsConfig;
use thordata_tools_protocol::{FailedOperation, ToolError, ToolOutput};

/// Arguments for [`ScrapeTool`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrapeInput {
    pub url: String,
    #[serde(default)]
    pub js_render: bool,
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl ScrapeInput {
    /// Input for a URL with default rendering and length cap.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Tool that fetches a page's HTML and caps its length.
pub struct ScrapeTool {
    client: Arc<dyn ServiceClient>,
    default_max_chars: usize,
}

impl ScrapeTool {
    /// Create the tool with the default length cap.
    pub fn new(client: Arc<dyn ServiceClient>) -> Self {
        Self {
            client,
            default_max_chars: LimitsConfig::default().scrape_max_chars,
        }
    }

    /// Override the cap used when the caller omits `max_length`.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.default_max_chars = max_chars;
        self
    }

    /// Fetch the page and return its (possibly truncated) HTML.
    pub fn run(&self, input: &ScrapeInput) -> Result<String, ToolError> {
        require_non_empty(&input.url, "url")?;
        let max_length = input.max_length.unwrap_or(self.default_max_chars);
        if max_length == 0 {
            return Err(ToolError::InvalidArguments(
                "max_length must be at least 1".to_string(),
            ));
        }
        info!(
            "scrape (url_len={}, js_render={}, max_length={})",
            input.url.len(),
            input.js_render,
            max_length
        );
        let request = FetchRequest::html(input.url.clone(), input.js_render);
        let html = self.client.fetch(&request)?.into_text();
        Ok(truncate_with_marker(html, max_length))
    }
}

impl Tool for ScrapeTool {
    fn name(&self) -> &str {
        "thordata_scrape_webpage"
    }

    fn description(&self) -> &str {
        "Scrape a webpage and return its HTML content. \
         Automatically bypasses anti-bot protections. \
         Set js_render=true for JavaScript-heavy pages. \
         Use this when you need to read the content of a specific webpage."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The URL of the webpage to scrape."
                },
                "js_render": {
                    "type": "boolean",
                    "default": false,
                    "description": "Whether to render JavaScript (uses headless browser)."
                },
                "max_length": {
                    "type": "integer",
                    "minimum": 1,
                    "default": self.default_max_chars,
                    "description": "Maximum characters to return (to control token usage)."
                }
            },
            "required": ["url"],
            "additionalProperties": false
        })
    }

    fn invoke(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: ScrapeInput = parse_args(args)?;
        let result = self.run(&input).map(ToolOutput::Text);
        report_delegate_failure(self.name(), result, || FailedOperation::Scrape {
            url: input.url.clone(),
        })
    }
}
