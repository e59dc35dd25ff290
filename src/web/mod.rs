//! Web server module
//!
//! Provides the HTTP API of the gateway.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::{cors_layer, create_router};
pub use state::AppState;
