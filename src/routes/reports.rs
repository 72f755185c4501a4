use axum::{routing::get, Router};
use crate::handlers::report::inventory_summary;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/summary", get(inventory_summary))
}
