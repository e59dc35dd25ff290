//! Semantic Scholar provider
//!
//! Uses the Graph API paper search endpoint. Only the fields the gateway
//! reshapes are requested.

use super::client::HttpClient;
use super::traits::*;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

/// Fields requested from `/paper/search`
pub const FIELDS: &str = "title,abstract,paperId,url,year,authors,citationCount,venue";

/// Fields requested from `/paper/{id}` for citations
pub const CITATION_FIELDS: &str = "paperId,title,authors,venue,year,publicationDate";

/// Semantic Scholar Graph API client
pub struct SemanticScholar {
    client: HttpClient,
    api_url: String,
}

impl SemanticScholar {
    pub fn new(client: HttpClient, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/paper/search", self.api_url)
    }

    /// `{api_url}/paper/{id}`; slashes inside ids such as `DOI:10.18653/v1/N18-3011`
    /// stay path separators, anything else unsafe is percent-encoded
    fn paper_url(&self, paper_id: &str) -> Result<String, ProviderError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| ProviderError::InvalidRequest(format!("bad api url: {}", e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProviderError::InvalidRequest("api url cannot be a base".to_string()))?;
            segments.pop_if_empty().push("paper");
            for part in paper_id.split('/') {
                segments.push(part);
            }
        }
        Ok(url.to_string())
    }

    /// Split the top-level search body into total and raw records
    fn parse_search_body(body: Value) -> Result<ProviderResults, ProviderError> {
        let Value::Object(mut body) = body else {
            return Err(ProviderError::Malformed("expected a JSON object".to_string()));
        };

        let total = body
            .get("total")
            .and_then(Value::as_u64)
            .ok_or_else(|| ProviderError::Malformed("missing integer field `total`".to_string()))?;

        // The API omits `data` when nothing matched
        let records = match body.remove("data") {
            Some(Value::Array(records)) => records,
            Some(Value::Null) | None if total == 0 => Vec::new(),
            Some(_) => {
                return Err(ProviderError::Malformed("field `data` is not an array".to_string()))
            }
            None => return Err(ProviderError::Malformed("missing field `data`".to_string())),
        };

        Ok(ProviderResults::new(total, records))
    }
}

#[async_trait]
impl PaperProvider for SemanticScholar {
    fn name(&self) -> &str {
        "semantic_scholar"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<ProviderResults, ProviderError> {
        let limit = limit.to_string();
        let body = self
            .client
            .get_json(
                &self.search_url(),
                &[("query", query), ("limit", limit.as_str()), ("fields", FIELDS)],
            )
            .await?;

        Self::parse_search_body(body)
    }

    async fn paper_details(&self, paper_id: &str) -> Result<Value, ProviderError> {
        let body = self
            .client
            .get_json(&self.paper_url(paper_id)?, &[("fields", CITATION_FIELDS)])
            .await?;

        if !body.is_object() {
            return Err(ProviderError::Malformed("expected a JSON object".to_string()));
        }
        Ok(body)
    }
}
