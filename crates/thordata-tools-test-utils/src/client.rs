use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use thordata_tools::{
    ClientError, FetchBody, FetchRequest, ProxyConfig, ProxyResponse, SerpRequest, ServiceClient,
};

/// A call received by [`MockServiceClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Search(SerpRequest),
    Fetch(FetchRequest),
    ProxiedGet {
        url: String,
        proxy: Option<ProxyConfig>,
        timeout: Duration,
    },
}

/// Scripted [`ServiceClient`] that records every call.
///
/// Responses are configured per capability. When `fail_with` is set every call
/// fails with that message after being recorded.
#[derive(Debug, Clone, Default)]
pub struct MockServiceClient {
    search: Option<Value>,
    fetch: Option<FetchBody>,
    proxy: Option<ProxyResponse>,
    failure: Option<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockServiceClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, response: Value) -> Self {
        self.search = Some(response);
        self
    }

    pub fn with_fetch(mut self, body: FetchBody) -> Self {
        self.fetch = Some(body);
        self
    }

    pub fn with_proxy_response(mut self, response: ProxyResponse) -> Self {
        self.proxy = Some(response);
        self
    }

    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    /// Convert into the shared handle tools expect.
    pub fn into_client(self) -> Arc<dyn ServiceClient> {
        Arc::new(self)
    }

    fn record(&self, call: RecordedCall) -> Result<(), ClientError> {
        self.calls.lock().push(call);
        match &self.failure {
            Some(message) => Err(ClientError::Request(message.clone())),
            None => Ok(()),
        }
    }
}

impl ServiceClient for MockServiceClient {
    fn search(&self, request: &SerpRequest) -> Result<Value, ClientError> {
        self.record(RecordedCall::Search(request.clone()))?;
        self.search
            .clone()
            .ok_or_else(|| ClientError::Request("no search response scripted".to_string()))
    }

    fn fetch(&self, request: &FetchRequest) -> Result<FetchBody, ClientError> {
        self.record(RecordedCall::Fetch(request.clone()))?;
        self.fetch
            .clone()
            .ok_or_else(|| ClientError::Request("no fetch response scripted".to_string()))
    }

    fn proxied_get(
        &self,
        url: &str,
        proxy: Option<&ProxyConfig>,
        timeout: Duration,
    ) -> Result<ProxyResponse, ClientError> {
        self.record(RecordedCall::ProxiedGet {
            url: url.to_string(),
            proxy: proxy.cloned(),
            timeout,
        })?;
        self.proxy
            .clone()
            .ok_or_else(|| ClientError::Request("no proxy response scripted".to_string()))
    }
}
