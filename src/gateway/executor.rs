//! Search execution against the configured provider

use super::models::{SearchRequest, SearchResponse};
use super::reshape::{Reshaped, Reshaper};
use crate::config::SearchSettings;
use crate::provider::PaperProvider;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Errors surfaced to callers of the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Failed to search papers: {0}")]
    ProviderFailure(String),
}

/// Forwards queries to a provider and reshapes the top results
pub struct SearchGateway {
    provider: Arc<dyn PaperProvider>,
    reshaper: Reshaper,
    max_results: usize,
}

impl SearchGateway {
    /// Create a gateway with default search settings
    pub fn new(provider: Arc<dyn PaperProvider>) -> Self {
        Self::with_settings(provider, &SearchSettings::default())
    }

    pub fn with_settings(provider: Arc<dyn PaperProvider>, settings: &SearchSettings) -> Self {
        Self {
            provider,
            reshaper: Reshaper::new(settings.missing_abstract.clone()),
            max_results: settings.max_results,
        }
    }

    /// Maximum number of papers in a response
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run one search. Records that fail to reshape are dropped; only a
    /// failed provider call fails the whole request.
    pub async fn handle_search(&self, request: &SearchRequest) -> Result<SearchResponse, GatewayError> {
        info!("Searching for: {}", request.query);

        let results = self
            .provider
            .search(&request.query, self.max_results)
            .await
            .map_err(|e| {
                error!("Search error from {}: {}", self.provider.name(), e);
                GatewayError::ProviderFailure(e.to_string())
            })?;

        info!("Found {} papers", results.total);

        let mut papers = Vec::with_capacity(self.max_results.min(results.records.len()));
        for (position, record) in results.records.into_iter().take(self.max_results).enumerate() {
            match self.reshaper.reshape(record) {
                Reshaped::Paper(paper) => {
                    debug!("Added paper: {}", paper.title);
                    papers.push(paper);
                }
                Reshaped::Skipped { reason } => {
                    warn!("Error processing paper at position {}: {}", position, reason);
                }
            }
        }

        Ok(SearchResponse {
            total: results.total,
            papers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderError, ProviderResults};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Provider returning canned results and recording the queries it saw
    struct StubProvider {
        outcome: fn() -> Result<ProviderResults, ProviderError>,
        seen: Mutex<Vec<(String, usize)>>,
    }

    impl StubProvider {
        fn new(outcome: fn() -> Result<ProviderResults, ProviderError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PaperProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn search(&self, query: &str, limit: usize) -> Result<ProviderResults, ProviderError> {
            self.seen.lock().unwrap().push((query.to_string(), limit));
            (self.outcome)()
        }

        async fn paper_details(&self, _paper_id: &str) -> Result<Value, ProviderError> {
            Err(ProviderError::InvalidRequest("not used by search".to_string()))
        }
    }

    fn record(i: usize) -> Value {
        json!({
            "paperId": format!("p{}", i),
            "url": format!("https://www.semanticscholar.org/paper/p{}", i),
            "title": format!("Paper {}", i),
            "year": 2000 + i,
        })
    }

    fn records(n: usize) -> Vec<Value> {
        (0..n).map(record).collect()
    }

    fn titles(response: &SearchResponse) -> Vec<String> {
        response.papers.iter().map(|p| p.title.clone()).collect()
    }

    #[tokio::test]
    async fn test_caps_at_ten_in_provider_order() {
        let provider = StubProvider::new(|| Ok(ProviderResults::new(5432, records(25))));
        let gateway = SearchGateway::new(provider.clone());

        let response = gateway
            .handle_search(&SearchRequest::new("transformer attention"))
            .await
            .unwrap();

        assert_eq!(response.total, 5432);
        assert_eq!(response.papers.len(), 10);
        assert_eq!(titles(&response), (0..10).map(|i| format!("Paper {}", i)).collect::<Vec<_>>());
        assert_eq!(
            provider.seen.lock().unwrap().as_slice(),
            &[("transformer attention".to_string(), 10)]
        );
    }

    #[tokio::test]
    async fn test_fewer_records_than_cap() {
        let provider = StubProvider::new(|| Ok(ProviderResults::new(3, records(3))));
        let response = SearchGateway::new(provider)
            .handle_search(&SearchRequest::new("rare topic"))
            .await
            .unwrap();
        assert_eq!(response.total, 3);
        assert_eq!(response.papers.len(), 3);
    }

    #[tokio::test]
    async fn test_bad_record_is_dropped_not_backfilled() {
        let provider = StubProvider::new(|| {
            let mut recs = records(12);
            recs[4]["citationCount"] = json!("lots");
            Ok(ProviderResults::new(12, recs))
        });
        let response = SearchGateway::new(provider)
            .handle_search(&SearchRequest::new("q"))
            .await
            .unwrap();

        assert_eq!(response.papers.len(), 9);
        assert!(!titles(&response).contains(&"Paper 4".to_string()));
        assert!(!titles(&response).contains(&"Paper 10".to_string()));
    }

    #[tokio::test]
    async fn test_provider_failure_message() {
        let provider = StubProvider::new(|| Err(ProviderError::Malformed("missing integer field `total`".to_string())));
        let err = SearchGateway::new(provider)
            .handle_search(&SearchRequest::new("q"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to search papers: malformed provider response: missing integer field `total`"
        );
    }

    #[tokio::test]
    async fn test_empty_query_is_forwarded() {
        let provider = StubProvider::new(|| Ok(ProviderResults::default()));
        let response = SearchGateway::new(provider.clone())
            .handle_search(&SearchRequest::new(""))
            .await
            .unwrap();
        assert_eq!(response.total, 0);
        assert!(response.papers.is_empty());
        assert_eq!(provider.seen.lock().unwrap()[0].0, "");
    }

    #[tokio::test]
    async fn test_custom_settings() {
        let provider = StubProvider::new(|| Ok(ProviderResults::new(50, records(50))));
        let settings = SearchSettings {
            max_results: 3,
            missing_abstract: "-".to_string(),
        };
        let gateway = SearchGateway::with_settings(provider.clone(), &settings);
        let response = gateway.handle_search(&SearchRequest::new("q")).await.unwrap();

        assert_eq!(gateway.max_results(), 3);
        assert_eq!(response.papers.len(), 3);
        assert!(response.papers.iter().all(|p| p.abstract_text == "-"));
        assert_eq!(provider.seen.lock().unwrap()[0].1, 3);
    }
}
