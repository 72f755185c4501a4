// src/handlers/category.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use crate::dtos::category::{CreateCategoryRequest, DeletedResponse};
use crate::error::{map_unique_violation, AppError};
use crate::extractors::{ValidId, ValidJson};
use crate::models::category::Category;
use crate::state::AppState;
use tracing::instrument;

// GET /api/categories
#[instrument(skip(db_pool))]
pub async fn list_categories(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(categories))
}

// POST /api/categories
#[instrument(skip(db_pool, req))]
pub async fn create_category(
    State(AppState { db_pool }): State<AppState>,
    ValidJson(req): ValidJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Category name is required"));
    }

    let category = sqlx::query_as::<_, Category>(
        "INSERT INTO categories (name) VALUES ($1) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(&db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "Category already exists"))?;

    Ok((StatusCode::CREATED, Json(category)))
}

// DELETE /api/categories/{id}
#[instrument(skip(db_pool))]
pub async fn delete_category(
    State(AppState { db_pool }): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, AppError> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Category not found"));
    }

    Ok(Json(DeletedResponse { message: "deleted" }))
}
