//! REST API for basic arithmetic over HTTP query parameters
//!
//! Configuration is loaded from config.toml in the working directory.

use std::sync::Arc;

use calc_api::{create_router, init_tracing, AppState, Config};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = Config::load("config.toml").unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        Config::default()
    });

    // Initialize tracing
    init_tracing(&config.logging.level);

    tracing::info!(
        "Starting API server on {}:{}",
        config.server.host,
        config.server.port
    );

    let state = Arc::new(AppState::default());
    let app = create_router(state);

    let addr: std::net::SocketAddr = config
        .socket_addr()
        .parse()
        .expect("Invalid socket address");

    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
