//! Application state shared across handlers

use crate::citation::CitationService;
use crate::config::Settings;
use crate::gateway::SearchGateway;
use crate::provider::{HttpClient, PaperProvider, SemanticScholar};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search gateway, created once and shared by all requests
    pub gateway: Arc<SearchGateway>,
    /// Citation renderer sharing the same provider
    pub citations: Arc<CitationService>,
}

impl AppState {
    /// Create new application state backed by Semantic Scholar
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.provider)?;
        let provider = Arc::new(SemanticScholar::new(client, settings.provider.api_url.clone()));
        Ok(Self::with_provider(settings, provider))
    }

    /// Create application state around an existing provider
    pub fn with_provider(settings: Settings, provider: Arc<dyn PaperProvider>) -> Self {
        let gateway = Arc::new(SearchGateway::with_settings(provider.clone(), &settings.search));
        let citations = Arc::new(CitationService::new(provider));
        Self {
            settings: Arc::new(settings),
            gateway,
            citations,
        }
    }
}
