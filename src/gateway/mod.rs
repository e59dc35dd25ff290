//! Search gateway module
//!
//! Forwards a query to the paper provider, caps the result list and
//! reshapes each record into a `PaperSummary`.

mod executor;
mod models;
mod reshape;

pub use executor::{GatewayError, SearchGateway};
pub use models::*;
pub use reshape::{ReshapeError, Reshaped, Reshaper};
