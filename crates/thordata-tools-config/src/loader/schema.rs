//! Schema validation helpers for the JSON5 tools configuration.

use crate::ConfigError;
use crate::model::{MAX_SEARCH_NUM, MIN_SEARCH_NUM};
use serde_json::{Map, Value};

/// Validate a config document against the schema.
pub(super) fn validate_config_schema(value: &Value, label: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, "")?;
    ensure_allowed_keys(map, &["$schema", "limits", "search"], label, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, label, "$schema")?;
    }
    if let Some(value) = map.get("limits") {
        validate_limits(value, label, "limits")?;
    }
    if let Some(value) = map.get("search") {
        validate_search(value, label, "search")?;
    }
    Ok(())
}

/// Validate the "limits" block.
fn validate_limits(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, path)?;
    let keys = [
        "scrape_max_chars",
        "universal_max_chars",
        "proxy_max_chars",
        "proxy_timeout_secs",
    ];
    ensure_allowed_keys(map, &keys, label, path)?;
    for key in keys {
        if let Some(value) = map.get(key) {
            expect_positive_u64(value, label, &join_path(path, key))?;
        }
    }
    Ok(())
}

/// Validate the "search" block.
fn validate_search(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, path)?;
    ensure_allowed_keys(map, &["default_engine", "default_num"], label, path)?;

    if let Some(value) = map.get("default_engine") {
        let field = join_path(path, "default_engine");
        expect_string(value, label, &field)?;
        if value.as_str().is_some_and(|engine| engine.trim().is_empty()) {
            return Err(invalid_field(label, &field, "expected non-empty string"));
        }
    }
    if let Some(value) = map.get("default_num") {
        let field = join_path(path, "default_num");
        let num = expect_positive_u64(value, label, &field)?;
        if !(u64::from(MIN_SEARCH_NUM)..=u64::from(MAX_SEARCH_NUM)).contains(&num) {
            return Err(invalid_field(
                label,
                &field,
                &format!("expected integer in {MIN_SEARCH_NUM}..={MAX_SEARCH_NUM}"),
            ));
        }
    }
    Ok(())
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    label: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(label, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected string"))
    }
}

/// Expect an integer greater than zero.
fn expect_positive_u64(value: &Value, label: &str, path: &str) -> Result<u64, ConfigError> {
    match value.as_u64() {
        Some(num) if num > 0 => Ok(num),
        _ => Err(invalid_field(label, path, "expected positive integer")),
    }
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    label: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(label, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(label: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{label}:{normalized_path}"),
        message: message.to_string(),
    }
}
