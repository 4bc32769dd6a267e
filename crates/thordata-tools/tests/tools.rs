//! Registry-level tests for the Thordata tools against a scripted client.

use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashSet;
use thordata_tools::{
    FetchBody, OutputFormat, ProxyResponse, TRUNCATION_MARKER, Tool, ToolRegistry,
    thordata_tool_registry, truncate_with_marker,
};
use thordata_tools_config::ToolsConfig;
use thordata_tools_protocol::{ToolError, ToolOutput};
use thordata_tools_test_utils::{MockServiceClient, RecordedCall, full_credentials};

fn registry_with(mock: &MockServiceClient) -> ToolRegistry {
    thordata_tool_registry(
        mock.clone().into_client(),
        &ToolsConfig::default(),
        full_credentials().proxy,
    )
}

fn is_snake_case(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && !name.starts_with('_')
        && !name.ends_with('_')
}

/// Names are unique snake_case identifiers and descriptions name the domain.
#[test]
fn tool_metadata_is_stable_and_descriptive() {
    let registry = registry_with(&MockServiceClient::new());
    let specs = registry.specs();

    let names: HashSet<&str> = specs.iter().map(|spec| spec.name.as_str()).collect();
    assert_eq!(names.len(), 4);
    for spec in &specs {
        assert!(is_snake_case(&spec.name), "bad name {}", spec.name);
        assert!(!spec.description.is_empty());
        assert_eq!(spec.args_schema["type"], "object");
        assert_eq!(spec.args_schema["additionalProperties"], false);
    }

    let keyword = |name: &str| -> &'static str {
        match name {
            "thordata_serp_search" => "search",
            "thordata_scrape_webpage" | "thordata_universal_scrape" => "scrap",
            "thordata_proxy_request" => "proxy",
            other => panic!("unexpected tool {other}"),
        }
    };
    for spec in &specs {
        assert!(
            spec.description.to_lowercase().contains(keyword(&spec.name)),
            "{} description lacks its keyword",
            spec.name
        );
    }
}

/// Search results pass through untouched.
#[test]
fn search_scenario_passes_mapping_through() {
    let response = json!({
        "organic": [{ "title": "T", "link": "https://x.test", "snippet": "s" }]
    });
    let mock = MockServiceClient::new().with_search(response.clone());
    let registry = registry_with(&mock);

    let output = registry
        .invoke(
            "thordata_serp_search",
            json!({ "query": "python web scraping", "engine": "google", "num": 5 }),
        )
        .expect("search");

    assert_eq!(output.into_value(), response);
    let calls = mock.calls();
    let [RecordedCall::Search(request)] = calls.as_slice() else {
        panic!("expected one search call");
    };
    assert_eq!(
        (request.query.as_str(), request.engine.as_str(), request.num),
        ("python web scraping", "google", 5)
    );
}

/// A failing search yields exactly the error mapping.
#[test]
fn search_failure_mapping_has_exact_keys() {
    let mock = MockServiceClient::new().fail_with("quota exceeded");
    let registry = registry_with(&mock);

    let value = registry
        .invoke("thordata_serp_search", json!({ "query": "rust" }))
        .expect("in-band error")
        .into_value();

    let keys: HashSet<&str> = value
        .as_object()
        .expect("mapping")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, HashSet::from(["error", "query", "engine"]));
    assert_eq!(value["engine"], "google");
}

/// A long page is capped at the requested length plus the marker.
#[test]
fn scrape_scenario_truncates_to_requested_length() {
    let mock = MockServiceClient::new().with_fetch(FetchBody::Text("a".repeat(100_000)));
    let registry = registry_with(&mock);

    let output = registry
        .invoke(
            "thordata_scrape_webpage",
            json!({ "url": "https://example.com", "max_length": 1000 }),
        )
        .expect("scrape");

    let text = output.as_text().expect("text");
    assert_eq!(
        text.chars().count(),
        1000 + TRUNCATION_MARKER.chars().count()
    );
    assert!(text.ends_with(TRUNCATION_MARKER));
    assert_eq!(truncate_with_marker(text.to_string(), 1000), text);
}

/// Pages within the cap come back unchanged.
#[test]
fn scrape_keeps_short_pages_whole() {
    for len in [0, 1, 999, 1000] {
        let page = "b".repeat(len);
        let mock = MockServiceClient::new().with_fetch(FetchBody::Text(page.clone()));
        let output = registry_with(&mock)
            .invoke(
                "thordata_scrape_webpage",
                json!({ "url": "https://example.com", "max_length": 1000 }),
            )
            .expect("scrape");
        assert_eq!(output, ToolOutput::Text(page));
    }
}

/// Screenshots come back as a PNG payload and request PNG output.
#[test]
fn universal_png_scenario_returns_binary_payload() {
    let bytes = vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3];
    let mock = MockServiceClient::new().with_fetch(FetchBody::Bytes(bytes.clone()));
    let registry = registry_with(&mock);

    let output = registry
        .invoke(
            "thordata_universal_scrape",
            json!({ "url": "https://example.com", "output_format": "png", "country": "gb" }),
        )
        .expect("screenshot");

    let ToolOutput::Binary(payload) = &output else {
        panic!("expected binary output, got {output:?}");
    };
    assert_eq!(payload.data, bytes);
    assert_eq!(output.into_value()["output_format"], "PNG");
    let calls = mock.calls();
    let [RecordedCall::Fetch(request)] = calls.as_slice() else {
        panic!("expected one fetch call");
    };
    assert_eq!(request.output_format, OutputFormat::Png);
    assert_eq!(request.country.as_deref(), Some("gb"));
}

/// Without a location the proxy request carries no proxy config.
#[test]
fn proxy_without_location_is_untargeted() {
    let mock = MockServiceClient::new().with_proxy_response(ProxyResponse::new(200, "plain"));
    let registry = registry_with(&mock);

    let output = registry
        .invoke("thordata_proxy_request", json!({ "url": "https://example.com" }))
        .expect("proxy");

    assert_eq!(output, ToolOutput::Text("plain".to_string()));
    let calls = mock.calls();
    let [RecordedCall::ProxiedGet { proxy, .. }] = calls.as_slice() else {
        panic!("expected one proxied get");
    };
    assert!(proxy.is_none());
}

/// Argument errors are hard errors and never reach the client.
#[test]
fn invalid_arguments_do_not_reach_the_client() {
    let mock = MockServiceClient::new();
    let registry = registry_with(&mock);

    let cases = [
        ("thordata_serp_search", json!({})),
        ("thordata_serp_search", json!({ "query": "" })),
        ("thordata_scrape_webpage", json!({ "url": "https://example.com", "js": true })),
        ("thordata_universal_scrape", json!({ "url": "https://example.com", "output_format": "jpeg" })),
        ("thordata_proxy_request", json!({ "url": 42 })),
    ];
    for (name, args) in cases {
        let err = registry.invoke(name, args).expect_err("invalid");
        assert!(matches!(err, ToolError::InvalidArguments(_)), "{name}: {err}");
    }
    assert!(mock.calls().is_empty());
}

/// The async entry point refuses instead of blocking.
#[tokio::test]
async fn async_invocation_is_refused() {
    let registry = registry_with(&MockServiceClient::new());
    for tool in registry.all() {
        let err = tool
            .invoke_async(json!({ "query": "rust", "url": "https://example.com" }))
            .await
            .expect_err("async");
        assert!(matches!(err, ToolError::AsyncUnsupported(ref name) if name == tool.name()));
    }
}
