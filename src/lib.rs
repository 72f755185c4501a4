// src/lib.rs
pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod report;
pub mod routes;
pub mod state;
pub mod views;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr, honouring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
