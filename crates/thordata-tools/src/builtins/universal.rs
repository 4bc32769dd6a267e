//! Universal scrape tool: JS rendering, screenshots and geo-targeting.

use crate::builtins::utils::{parse_args, report_delegate_failure, require_non_empty};
use crate::truncate::truncate_with_marker;
use crate::{FetchRequest, OutputFormat, ServiceClient, Tool};
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use thordata_tools_config::LimitsConfig;
use thordata_tools_protocol::{BinaryPayload, FailedOperation, ToolError, ToolOutput};

/// Arguments for [`UniversalScrapeTool`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniversalScrapeInput {
    pub url: String,
    #[serde(default = "default_js_render")]
    pub js_render: bool,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub wait_for: Option<String>,
}

impl UniversalScrapeInput {
    /// Rendered HTML request for a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            js_render: default_js_render(),
            output_format: default_output_format(),
            country: None,
            wait_for: None,
        }
    }
}

fn default_js_render() -> bool {
    true
}

fn default_output_format() -> String {
    OutputFormat::Html.as_str().to_string()
}

/// Tool for advanced scraping via the universal scraping API.
pub struct UniversalScrapeTool {
    client: Arc<dyn ServiceClient>,
    max_chars: usize,
}

impl UniversalScrapeTool {
    /// Create the tool with the default HTML cap.
    pub fn new(client: Arc<dyn ServiceClient>) -> Self {
        Self {
            client,
            max_chars: LimitsConfig::default().universal_max_chars,
        }
    }

    /// Override the HTML cap.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Build the fetch request for an input.
    pub fn request(&self, input: &UniversalScrapeInput) -> Result<FetchRequest, ToolError> {
        require_non_empty(&input.url, "url")?;
        let output_format = OutputFormat::parse(&input.output_format).ok_or_else(|| {
            ToolError::InvalidArguments(format!(
                "output_format must be 'html' or 'png', got '{}'",
                input.output_format
            ))
        })?;
        Ok(FetchRequest {
            url: input.url.clone(),
            js_render: input.js_render,
            output_format,
            country: input.country.clone(),
            wait_for: input.wait_for.clone(),
            block_resources: None,
        })
    }

    /// Fetch the page as truncated HTML text or as a PNG payload.
    pub fn run(&self, input: &UniversalScrapeInput) -> Result<ToolOutput, ToolError> {
        let request = self.request(input)?;
        info!(
            "universal scrape (url_len={}, js_render={}, output_format={})",
            request.url.len(),
            request.js_render,
            request.output_format
        );
        let body = self.client.fetch(&request)?;
        let output = match request.output_format {
            OutputFormat::Html => {
                ToolOutput::Text(truncate_with_marker(body.into_text(), self.max_chars))
            }
            OutputFormat::Png => ToolOutput::Binary(BinaryPayload::png(body.into_bytes())),
        };
        Ok(output)
    }
}

impl Tool for UniversalScrapeTool {
    fn name(&self) -> &str {
        "thordata_universal_scrape"
    }

    fn description(&self) -> &str {
        "Advanced web scraping with JavaScript rendering, geo-targeting, and more. \
         Use this for complex pages that require JS or specific location access. \
         Can also take screenshots by setting output_format='png'."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The URL to scrape."
                },
                "js_render": {
                    "type": "boolean",
                    "default": true,
                    "description": "Enable JavaScript rendering (recommended for modern sites)."
                },
                "output_format": {
                    "type": "string",
                    "enum": ["html", "png"],
                    "default": "html",
                    "description": "Output format: 'html' for content or 'png' for screenshot."
                },
                "country": {
                    "type": "string",
                    "description": "Country code for geo-targeted request (e.g., 'us', 'gb')."
                },
                "wait_for": {
                    "type": "string",
                    "description": "CSS selector to wait for before returning content."
                }
            },
            "required": ["url"],
            "additionalProperties": false
        })
    }

    fn invoke(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: UniversalScrapeInput = parse_args(args)?;
        let result = self.run(&input);
        report_delegate_failure(self.name(), result, || FailedOperation::Scrape {
            url: input.url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{UniversalScrapeInput, UniversalScrapeTool};
    use crate::builtins::test_support::StubClient;
    use crate::truncate::TRUNCATION_MARKER;
    use crate::{FetchBody, FetchRequest, OutputFormat, Tool};
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use thordata_tools_protocol::{BinaryPayload, ToolError, ToolOutput};

    fn stub_with(body: FetchBody) -> Arc<StubClient> {
        Arc::new(StubClient {
            fetch_response: Some(body),
            ..StubClient::default()
        })
    }

    #[test]
    fn forwards_all_parameters_verbatim() {
        let client = stub_with(FetchBody::Text("<html>Rendered</html>".to_string()));
        let tool = UniversalScrapeTool::new(client.clone());

        let output = tool
            .invoke(json!({
                "url": "https://example.com",
                "js_render": true,
                "output_format": "html",
                "country": "us",
                "wait_for": ".content"
            }))
            .expect("scrape");

        assert_eq!(output, ToolOutput::Text("<html>Rendered</html>".to_string()));
        let request = client.last_fetch.lock().clone().expect("request");
        assert_eq!(
            request,
            FetchRequest {
                url: "https://example.com".to_string(),
                js_render: true,
                output_format: OutputFormat::Html,
                country: Some("us".to_string()),
                wait_for: Some(".content".to_string()),
                block_resources: None,
            }
        );
    }

    #[test]
    fn defaults_to_rendered_html() {
        let client = stub_with(FetchBody::Text(String::new()));
        let tool = UniversalScrapeTool::new(client.clone());

        tool.run(&UniversalScrapeInput::new("https://example.com"))
            .expect("scrape");

        let request = client.last_fetch.lock().clone().expect("request");
        assert!(request.js_render);
        assert_eq!(request.output_format, OutputFormat::Html);
    }

    #[test]
    fn html_is_truncated_at_universal_cap() {
        let client = stub_with(FetchBody::Bytes("y".repeat(20_000).into_bytes()));
        let tool = UniversalScrapeTool::new(client);

        let output = tool
            .invoke(json!({ "url": "https://example.com" }))
            .expect("scrape");

        let text = output.as_text().expect("text");
        assert_eq!(text, format!("{}{TRUNCATION_MARKER}", "y".repeat(10_000)));
    }

    #[test]
    fn html_cap_is_configurable() {
        let client = stub_with(FetchBody::Text("abcdef".to_string()));
        let tool = UniversalScrapeTool::new(client).with_max_chars(2);

        let output = tool
            .run(&UniversalScrapeInput::new("https://example.com"))
            .expect("scrape");
        assert_eq!(output, ToolOutput::Text(format!("ab{TRUNCATION_MARKER}")));
    }

    #[test]
    fn png_output_is_wrapped_as_base64_payload() {
        let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0xFF];
        let client = stub_with(FetchBody::Bytes(png.clone()));
        let tool = UniversalScrapeTool::new(client.clone());

        let output = tool
            .invoke(json!({ "url": "https://example.com", "output_format": "PNG" }))
            .expect("screenshot");

        assert_eq!(output, ToolOutput::Binary(BinaryPayload::png(png.clone())));
        let value = output.into_value();
        assert_eq!(value["output_format"], "PNG");
        let decoded = STANDARD
            .decode(value["data_base64"].as_str().expect("string"))
            .expect("base64");
        assert_eq!(decoded, png);
        let request = client.last_fetch.lock().clone().expect("request");
        assert_eq!(request.output_format, OutputFormat::Png);
    }

    #[test]
    fn unsupported_output_format_is_rejected() {
        let client = Arc::new(StubClient::default());
        let tool = UniversalScrapeTool::new(client.clone());

        let err = tool
            .invoke(json!({ "url": "https://example.com", "output_format": "pdf" }))
            .expect_err("pdf");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(client.last_fetch.lock().is_none());
    }

    #[test]
    fn failure_is_reported_as_prefixed_string() {
        let tool = UniversalScrapeTool::new(Arc::new(StubClient::failing("blocked")));

        let output = tool
            .invoke(json!({ "url": "https://example.com", "output_format": "png" }))
            .expect("in-band error");
        assert_eq!(
            output.into_value(),
            json!("Error scraping https://example.com: blocked")
        );
    }
}
