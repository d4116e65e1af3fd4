//! HTTP API module for the salary engine.
//!
//! This module provides the REST endpoints that validate caller input and
//! hand it to the conversion engine.

mod handlers;
mod request;
mod response;
mod server;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, RatesResponse};
pub use server::serve;
pub use state::AppState;
