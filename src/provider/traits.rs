//! Provider traits and types

use async_trait::async_trait;
use serde_json::Value;

/// Raw result set returned by a provider
#[derive(Debug, Clone, Default)]
pub struct ProviderResults {
    /// Total number of matches reported by the provider
    pub total: u64,
    /// Paper records in provider order, not yet reshaped
    pub records: Vec<Value>,
}

impl ProviderResults {
    pub fn new(total: u64, records: Vec<Value>) -> Self {
        Self { total, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Failures of the provider call as a whole
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),

    #[error("invalid provider request: {0}")]
    InvalidRequest(String),
}

/// An academic paper search capability
#[async_trait]
pub trait PaperProvider: Send + Sync {
    /// Provider name, used in logs
    fn name(&self) -> &str;

    /// Search for papers, returning at most `limit` records
    async fn search(&self, query: &str, limit: usize) -> Result<ProviderResults, ProviderError>;

    /// Fetch bibliographic details of a single paper as a raw record
    async fn paper_details(&self, paper_id: &str) -> Result<Value, ProviderError>;
}
