// src/main.rs
use std::net::SocketAddr;

use dotenvy::dotenv;
use stock_ledger::{config::Config, routes, state::AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    // Load the inventory from its store
    let app_state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open the product store");
            return;
        }
    };
    match &config.store_path {
        Some(path) => tracing::info!(path = %path.display(), key = %config.store_key, "Using file store"),
        None => tracing::info!("Using in-memory store; products are lost on exit"),
    }

    let app = routes::app(app_state);

    let Some((listener, addr)) = bind_with_fallback(&config).await else {
        tracing::error!(host = %config.host, port = config.port, "No free port to listen on");
        return;
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}

/// Binds the first free address from `Config::listen_addrs`, so a busy
/// port does not stop the server from starting.
async fn bind_with_fallback(config: &Config) -> Option<(TcpListener, SocketAddr)> {
    for addr in config.listen_addrs() {
        match TcpListener::bind(addr).await {
            Ok(listener) => return Some((listener, addr)),
            Err(e) => tracing::warn!(%addr, error = %e, "Could not bind, trying the next port"),
        }
    }
    None
}
