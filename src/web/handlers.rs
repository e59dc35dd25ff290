//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::citation::CitationFormat;
use crate::gateway::{SearchRequest, SearchResponse};
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Search handler
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn search(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let request: SearchRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;
    let response = state.gateway.handle_search(&request).await?;
    Ok(Json(response))
}

/// Query parameters for citations
#[derive(Debug, Deserialize)]
pub struct CitationParams {
    #[serde(rename = "paperId")]
    pub paper_id: Option<String>,
    /// bibtex (default), apa, mla or chicago
    pub format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CitationResponse {
    pub citation: String,
}

/// Citation handler
pub async fn citation(
    State(state): State<AppState>,
    Query(params): Query<CitationParams>,
) -> Result<Json<CitationResponse>, ApiError> {
    let format = params
        .format
        .as_deref()
        .map(CitationFormat::from_name)
        .unwrap_or_default();
    let paper_id = params.paper_id.unwrap_or_default();

    let citation = state.citations.cite(&paper_id, format).await?;
    Ok(Json(CitationResponse { citation }))
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
