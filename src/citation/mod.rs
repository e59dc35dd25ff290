//! Citation module
//!
//! Looks up a single paper through the provider and renders it as a
//! BibTeX, APA, MLA or Chicago citation.

mod formats;

pub use formats::{CitationFormat, CitedAuthor, PaperDetails};

use crate::provider::PaperProvider;
use std::sync::Arc;
use tracing::{error, info};

/// Errors surfaced to callers of the citation endpoint
#[derive(Debug, thiserror::Error)]
pub enum CitationError {
    #[error("Paper ID is required")]
    MissingPaperId,

    #[error("Failed to generate citation: {0}")]
    ProviderFailure(String),
}

/// Renders citations for papers fetched from a provider
pub struct CitationService {
    provider: Arc<dyn PaperProvider>,
}

impl CitationService {
    pub fn new(provider: Arc<dyn PaperProvider>) -> Self {
        Self { provider }
    }

    /// Fetch `paper_id` and render it in `format`
    pub async fn cite(&self, paper_id: &str, format: CitationFormat) -> Result<String, CitationError> {
        if paper_id.is_empty() {
            return Err(CitationError::MissingPaperId);
        }

        info!("Generating {:?} citation for {}", format, paper_id);

        let record = self.provider.paper_details(paper_id).await.map_err(|e| {
            error!("Citation error from {}: {}", self.provider.name(), e);
            CitationError::ProviderFailure(e.to_string())
        })?;

        let paper: PaperDetails = serde_json::from_value(record).map_err(|e| {
            error!("Unexpected paper details for {}: {}", paper_id, e);
            CitationError::ProviderFailure(format!("malformed paper details: {}", e))
        })?;

        Ok(format.render(&paper, paper_id))
    }
}
