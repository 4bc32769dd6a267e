//! Stub service client for built-in tool unit tests.

use crate::{ClientError, FetchBody, FetchRequest, ProxyConfig, ProxyResponse, SerpRequest};
use crate::ServiceClient;
use parking_lot::Mutex;
use serde_json::Value;
use std::time::Duration;

/// Returns canned responses (or a canned failure) and remembers the last call.
#[derive(Default)]
pub(crate) struct StubClient {
    pub(crate) search_response: Option<Value>,
    pub(crate) fetch_response: Option<FetchBody>,
    pub(crate) proxy_response: Option<ProxyResponse>,
    pub(crate) failure: Option<String>,
    pub(crate) last_search: Mutex<Option<SerpRequest>>,
    pub(crate) last_fetch: Mutex<Option<FetchRequest>>,
    pub(crate) last_proxy: Mutex<Option<(String, Option<ProxyConfig>, Duration)>>,
}

impl StubClient {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn fail(&self) -> Result<(), ClientError> {
        match &self.failure {
            Some(message) => Err(ClientError::Request(message.clone())),
            None => Ok(()),
        }
    }
}

impl ServiceClient for StubClient {
    fn search(&self, request: &SerpRequest) -> Result<Value, ClientError> {
        *self.last_search.lock() = Some(request.clone());
        self.fail()?;
        Ok(self.search_response.clone().unwrap_or(Value::Null))
    }

    fn fetch(&self, request: &FetchRequest) -> Result<FetchBody, ClientError> {
        *self.last_fetch.lock() = Some(request.clone());
        self.fail()?;
        Ok(self
            .fetch_response
            .clone()
            .unwrap_or_else(|| FetchBody::Text(String::new())))
    }

    fn proxied_get(
        &self,
        url: &str,
        proxy: Option<&ProxyConfig>,
        timeout: Duration,
    ) -> Result<ProxyResponse, ClientError> {
        *self.last_proxy.lock() = Some((url.to_string(), proxy.cloned(), timeout));
        self.fail()?;
        Ok(self
            .proxy_response
            .clone()
            .unwrap_or_else(|| ProxyResponse::new(200, Vec::new())))
    }
}
