//! HTTP server start-up.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::handlers::create_router;
use super::state::AppState;

/// Binds `addr` and serves the API until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> EngineResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| EngineError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;

    let local_addr = listener.local_addr().unwrap_or(addr);
    info!(
        addr = %local_addr,
        rates = %state.config().metadata().name,
        "Salary engine listening"
    );

    axum::serve(listener, create_router(state))
        .await
        .map_err(|e| EngineError::ServerError {
            message: e.to_string(),
        })
}
