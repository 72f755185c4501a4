// src/handlers/product.rs
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use crate::dtos::product::{AddProductForm, NewProduct};
use crate::models::product::Product;
use crate::state::AppState;
use crate::error::AppError;
use crate::views::render_product_page;
use tracing::{error, info, instrument};

// GET / - Product listing page
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    match Product::fetch_all(&state.db_pool).await {
        Ok(products) => Ok(Html(render_product_page(&products))),
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// POST /adicionar - Insert from the form, then back to the listing
#[instrument(skip(state, form))]
pub async fn add_product(
    State(state): State<AppState>,
    Form(form): Form<AddProductForm>,
) -> Result<Response, AppError> {
    let product = NewProduct::try_from(form)?;

    let id = Product::insert(&state.db_pool, &product).await.map_err(|e| {
        error!(?e, "Failed to insert product");
        AppError::db(e)
    })?;
    info!(id, nome = %product.nome, "Product added");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}
