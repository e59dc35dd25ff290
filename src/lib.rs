//! Scholar Gateway: a small academic paper search service
//!
//! Accepts a query over HTTP, forwards it to Semantic Scholar and returns
//! the top results in a simplified JSON shape. Single papers can also be
//! rendered as citations.

pub mod citation;
pub mod config;
pub mod gateway;
pub mod provider;
pub mod web;

pub use config::Settings;
pub use gateway::{GatewayError, PaperSummary, SearchGateway, SearchRequest, SearchResponse};
pub use provider::PaperProvider;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
