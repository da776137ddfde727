use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, types::CallbackResult};

pub fn router(state: Arc<Mutex<Option<CallbackResult>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)))
}

/// Serves the callback routes on `addr` until the task is dropped.
pub async fn start_api_server(
    addr: &str,
    state: Arc<Mutex<Option<CallbackResult>>>,
) -> Result<(), String> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {addr}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    axum::serve(listener, router(state))
        .await
        .map_err(|e| e.to_string())
}
