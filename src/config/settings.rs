//! Settings structures for the gateway configuration

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Largest page Semantic Scholar's `/paper/search` accepts
pub const MAX_PROVIDER_LIMIT: usize = 100;

/// Main settings structure, mirrors `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub provider: ProviderSettings,
    pub search: SearchSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SCHOLAR_GATEWAY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SCHOLAR_GATEWAY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SCHOLAR_GATEWAY_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = split_origins(&val);
        }
        if let Ok(val) = std::env::var("SEMANTIC_SCHOLAR_API_URL") {
            self.provider.api_url = val;
        }
        if let Ok(val) = std::env::var("SEMANTIC_SCHOLAR_API_KEY") {
            if !val.is_empty() {
                self.provider.api_key = Some(val);
            }
        }
        if let Ok(val) = std::env::var("SCHOLAR_GATEWAY_REQUEST_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.provider.request_timeout = Some(secs);
            }
        }
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 || self.search.max_results > MAX_PROVIDER_LIMIT {
            bail!(
                "search.max_results must be between 1 and {}, got {}",
                MAX_PROVIDER_LIMIT,
                self.search.max_results
            );
        }
        if let Some(timeout) = self.provider.request_timeout {
            if !(timeout > 0.0) || !timeout.is_finite() || timeout >= u64::MAX as f64 {
                bail!("provider.request_timeout must be a positive number of seconds, got {}", timeout);
            }
        }
        Url::parse(&self.provider.api_url)
            .map_err(|e| anyhow::anyhow!("invalid provider.api_url {:?}: {}", self.provider.api_url, e))?;
        Ok(())
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Cross-origin settings for browser callers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsSettings {
    /// Origins allowed to call the API
    pub allowed_origins: Vec<String>,
    /// Whether cookies and auth headers may be sent cross-origin
    pub allow_credentials: bool,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allow_credentials: true,
        }
    }
}

/// Upstream paper provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the Semantic Scholar Graph API
    pub api_url: String,
    /// API key for higher rate limits
    pub api_key: Option<String>,
    /// Request timeout in seconds (none = wait indefinitely)
    pub request_timeout: Option<f64>,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.semanticscholar.org/graph/v1".to_string(),
            api_key: None,
            request_timeout: None,
            pool_maxsize: 20,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of papers returned per request
    pub max_results: usize,
    /// Placeholder used when a paper has no abstract
    pub missing_abstract: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_results: 10,
            missing_abstract: "No abstract available".to_string(),
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
