//! Paper provider module
//!
//! Defines the `PaperProvider` trait and the Semantic Scholar implementation
//! the gateway delegates to.

mod client;
mod semantic_scholar;
mod traits;

pub use client::{HttpClient, USER_AGENT};
pub use semantic_scholar::{SemanticScholar, CITATION_FIELDS, FIELDS};
pub use traits::*;
