// src/main.rs
use estoque::{config::AppConfig, database, routes, state::AppState};
use tokio::net::TcpListener;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    // Initialize logging
    estoque::init_tracing();

    // Load configuration (.env first, then the environment)
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    // Create database pool and bring the schema up to date
    let db_pool = match database::create_pool(&config).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create database pool");
            std::process::exit(1);
        }
    };
    if let Err(e) = database::run_migrations(&db_pool).await {
        tracing::error!(error = %e, "Failed to run migrations");
        std::process::exit(1);
    }

    let app = routes::create_router(AppState::new(db_pool.clone()));

    let listener = match bind_listener(&config).await {
        Some((listener, addr)) => {
            tracing::info!("Server running on http://{}", addr);
            listener
        }
        None => {
            tracing::error!(
                "Failed to bind to any port starting at {} on {}",
                config.port,
                config.host
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    db_pool.close().await;
    tracing::info!("Server shutdown complete");
}

/// Tries `port..=port+20` so an address already in use does not stop the server.
async fn bind_listener(config: &AppConfig) -> Option<(TcpListener, SocketAddr)> {
    for offset in 0u16..=20 {
        let port = config.port.saturating_add(offset);
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Some((listener, addr)),
            Err(e) if offset == 0 => {
                tracing::warn!(%addr, error = %e, "Port in use, trying next");
            }
            Err(_) => {}
        }
    }
    None
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::warn!("Received Ctrl+C, shutting down");
}
