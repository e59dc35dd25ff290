//! Error responses of the HTTP API

use crate::citation::CitationError;
use crate::gateway::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Errors returned by handlers; every variant renders as `{"detail": ...}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Search(#[from] GatewayError),

    #[error(transparent)]
    Citation(#[from] CitationError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Search(GatewayError::ProviderFailure(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Citation(CitationError::MissingPaperId) => StatusCode::BAD_REQUEST,
            ApiError::Citation(CitationError::ProviderFailure(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
