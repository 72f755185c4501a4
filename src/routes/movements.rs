use axum::{routing::get, Router};
use crate::handlers::movement::{create_movement, list_movements};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/movements", get(list_movements).post(create_movement))
}
