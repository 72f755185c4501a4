pub mod products;
pub mod categories;
pub mod materials;
pub mod movements;
pub mod reports;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use crate::state::AppState;

/// JSON inventory API, mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(categories::routes())
        .merge(materials::routes())
        .merge(movements::routes())
        .merge(reports::routes())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(products::routes())
        .route("/health", get(health_check))
        .nest("/api", api_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
