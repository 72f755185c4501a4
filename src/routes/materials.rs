use axum::{routing::get, Router};
use crate::handlers::material::{create_material, get_material, list_materials, update_material};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/materials", get(list_materials).post(create_material))
        .route("/materials/{id}", get(get_material).put(update_material))
}
