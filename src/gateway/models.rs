//! Request and response models for the search endpoint

use serde::{Deserialize, Serialize};

/// Incoming search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query, forwarded as-is
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// A paper author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

/// Simplified view of one provider record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSummary {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub paper_id: String,
    pub url: String,
    pub year: Option<i64>,
    pub authors: Vec<Author>,
    pub citation_count: u64,
    pub venue: Option<String>,
}

/// Search endpoint response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total matches reported by the provider, not the length of `papers`
    pub total: u64,
    pub papers: Vec<PaperSummary>,
}
