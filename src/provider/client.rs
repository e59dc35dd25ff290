//! HTTP client shared by providers

use super::traits::ProviderError;
use crate::config::ProviderSettings;
use anyhow::Result;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every outgoing request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper configured from `ProviderSettings`
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    api_key: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&ProviderSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &ProviderSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // No timeout unless one is configured
        if let Some(secs) = settings.request_timeout {
            let timeout = Duration::try_from_secs_f64(secs)
                .map_err(|e| anyhow::anyhow!("invalid request timeout {}: {}", secs, e))?;
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
        })
    }

    /// GET a URL with query parameters and decode the body as JSON
    pub async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value, ProviderError> {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if !params.is_empty() {
            request = request.query(params);
        }
        request = self.authorize(request);

        let response = request.send().await?;
        let status = response.status();
        debug!("GET {} -> {}", response.url(), status);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ProviderError::Malformed(e.to_string()))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("x-api-key", key),
            None => request,
        }
    }

    /// Whether requests carry an API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
