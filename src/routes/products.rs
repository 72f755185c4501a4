use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::product::{add_product, list_products};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/adicionar", post(add_product))
}
