//! SERP search tool.

use crate::builtins::utils::{parse_args, report_delegate_failure, require_non_empty};
use crate::{SerpRequest, ServiceClient, Tool};
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;
use thordata_tools_config::{MAX_SEARCH_NUM, MIN_SEARCH_NUM, SearchConfig};
use thordata_tools_protocol::{FailedOperation, ToolError, ToolOutput};

/// Search engines with known aliases.
///
/// Names outside the alias table are kept as [`SearchEngine::Other`] and sent
/// to the service verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEngine {
    Google,
    Bing,
    Yandex,
    DuckDuckGo,
    Baidu,
    Other(String),
}

impl SearchEngine {
    /// Resolve an engine name or alias.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "google" | "g" => SearchEngine::Google,
            "bing" | "msn" => SearchEngine::Bing,
            "yandex" | "ya" => SearchEngine::Yandex,
            "duckduckgo" | "duck_duck_go" | "duck-duck-go" | "ddg" => SearchEngine::DuckDuckGo,
            "baidu" => SearchEngine::Baidu,
            _ => SearchEngine::Other(name.to_string()),
        }
    }

    /// Identifier understood by the service.
    pub fn as_str(&self) -> &str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::Yandex => "yandex",
            SearchEngine::DuckDuckGo => "duckduckgo",
            SearchEngine::Baidu => "baidu",
            SearchEngine::Other(name) => name,
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments for [`SerpSearchTool`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerpSearchInput {
    pub query: String,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub num: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub search_type: Option<String>,
}

impl SerpSearchInput {
    /// Input with only a query; everything else uses tool defaults.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Tool that queries search engines through the SERP API.
pub struct SerpSearchTool {
    client: Arc<dyn ServiceClient>,
    defaults: SearchConfig,
}

impl SerpSearchTool {
    /// Create the tool with default engine and result count.
    pub fn new(client: Arc<dyn ServiceClient>) -> Self {
        Self {
            client,
            defaults: SearchConfig::default(),
        }
    }

    /// Override the engine and result count used when the caller omits them.
    pub fn with_defaults(mut self, defaults: SearchConfig) -> Self {
        self.defaults = defaults;
        self
    }

    /// Validate the input and resolve defaults into a service request.
    pub fn request(&self, input: &SerpSearchInput) -> Result<SerpRequest, ToolError> {
        require_non_empty(&input.query, "query")?;
        let num = input.num.unwrap_or(self.defaults.default_num);
        if !(MIN_SEARCH_NUM..=MAX_SEARCH_NUM).contains(&num) {
            return Err(ToolError::InvalidArguments(format!(
                "num must be between {MIN_SEARCH_NUM} and {MAX_SEARCH_NUM}, got {num}"
            )));
        }
        let engine = SearchEngine::parse(self.engine_name(input));
        Ok(SerpRequest {
            query: input.query.clone(),
            engine: engine.as_str().to_string(),
            num,
            country: input.country.clone(),
            language: input.language.clone(),
            search_type: input.search_type.clone(),
        })
    }

    /// Run a search, returning the service response unchanged.
    ///
    /// Service failures are returned as [`ToolError::Delegate`].
    pub fn run(&self, input: &SerpSearchInput) -> Result<Value, ToolError> {
        let request = self.request(input)?;
        info!(
            "serp search (query_len={}, engine={}, num={})",
            request.query.len(),
            request.engine,
            request.num
        );
        Ok(self.client.search(&request)?)
    }

    fn engine_name<'a>(&'a self, input: &'a SerpSearchInput) -> &'a str {
        input
            .engine
            .as_deref()
            .unwrap_or(&self.defaults.default_engine)
    }
}

impl Tool for SerpSearchTool {
    fn name(&self) -> &str {
        "thordata_serp_search"
    }

    fn description(&self) -> &str {
        "Search the web using Thordata SERP API. \
         Supports Google, Bing, Yandex, DuckDuckGo, and Baidu. \
         Returns structured search results including titles, links, and snippets. \
         Use this when you need to find information on the web."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "minLength": 1,
                    "description": "The search query/keywords to search for."
                },
                "engine": {
                    "type": "string",
                    "default": self.defaults.default_engine,
                    "description": "Search engine: google, bing, yandex, duckduckgo, baidu."
                },
                "num": {
                    "type": "integer",
                    "minimum": MIN_SEARCH_NUM,
                    "maximum": MAX_SEARCH_NUM,
                    "default": self.defaults.default_num,
                    "description": format!("Number of results to return ({MIN_SEARCH_NUM}-{MAX_SEARCH_NUM}).")
                },
                "country": {
                    "type": "string",
                    "description": "Country code for localized results (e.g., 'us', 'gb')."
                },
                "language": {
                    "type": "string",
                    "description": "Language code for results (e.g., 'en', 'es')."
                },
                "search_type": {
                    "type": "string",
                    "description": "Type of search: images, news, shopping, videos."
                }
            },
            "required": ["query"],
            "additionalProperties": false
        })
    }

    fn invoke(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: SerpSearchInput = parse_args(args)?;
        let result = self.run(&input).map(ToolOutput::Structured);
        report_delegate_failure(self.name(), result, || FailedOperation::Search {
            query: input.query.clone(),
            engine: self.engine_name(&input).to_string(),
        })
    }
}
