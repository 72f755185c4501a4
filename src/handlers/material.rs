// src/handlers/material.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use sqlx::PgConnection;
use crate::dtos::material::{
    normalize_category, CreateMaterialRequest, CreatedResponse, MaterialResponse,
    UpdateMaterialRequest,
};
use crate::error::AppError;
use crate::extractors::{ValidId, ValidJson};
use crate::models::material::Material;
use crate::state::AppState;
use tracing::{error, info, instrument};

const SELECT_MATERIALS: &str = r#"SELECT m.id, m.name, m.sku, m.category_id, c.name AS category_name,
        m.quantity, m.min_quantity, m.resupply_quantity, m.alert_percentage,
        m.description, m.image, m.is_archived, m.created_at
   FROM materials m
   LEFT JOIN categories c ON m.category_id = c.id"#;

/// Looks up a category by name, creating it when missing.
async fn resolve_category(
    conn: &mut PgConnection,
    category: Option<&str>,
) -> Result<Option<i64>, sqlx::Error> {
    let Some(name) = normalize_category(category) else {
        return Ok(None);
    };

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO categories (name) VALUES ($1)
         ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
         RETURNING id",
    )
    .bind(name)
    .fetch_one(conn)
    .await?;

    Ok(Some(id))
}

// GET /api/materials
#[instrument(skip(db_pool))]
pub async fn list_materials(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<MaterialResponse>>, AppError> {
    let query = format!("{SELECT_MATERIALS} ORDER BY m.created_at DESC, m.id DESC");

    match sqlx::query_as::<_, Material>(&query).fetch_all(&db_pool).await {
        Ok(materials) => Ok(Json(materials.into_iter().map(MaterialResponse::from).collect())),
        Err(e) => {
            error!(?e, "Failed to fetch materials");
            Err(e.into())
        }
    }
}

// GET /api/materials/{id}
#[instrument(skip(db_pool))]
pub async fn get_material(
    State(AppState { db_pool }): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<MaterialResponse>, AppError> {
    let query = format!("{SELECT_MATERIALS} WHERE m.id = $1");

    let material = sqlx::query_as::<_, Material>(&query)
        .bind(id)
        .fetch_optional(&db_pool)
        .await?
        .ok_or_else(|| AppError::not_found("Material not found"))?;

    Ok(Json(MaterialResponse::from(material)))
}

// POST /api/materials
#[instrument(skip(db_pool, req))]
pub async fn create_material(
    State(AppState { db_pool }): State<AppState>,
    ValidJson(req): ValidJson<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::validation("Material name is required"));
    }
    if req.quantity < 0 {
        return Err(AppError::validation("Quantity cannot be negative"));
    }

    let mut tx = db_pool.begin().await?;

    let category_id = resolve_category(&mut tx, req.category.as_deref()).await?;

    let (id,): (i64,) = sqlx::query_as(
        r#"INSERT INTO materials
           (name, sku, category_id, quantity, min_quantity, resupply_quantity,
            alert_percentage, description, image)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
           RETURNING id"#,
    )
    .bind(req.name.trim())
    .bind(&req.sku)
    .bind(category_id)
    .bind(req.quantity)
    .bind(req.min_quantity)
    .bind(req.resupply_quantity)
    .bind(req.alert_percentage)
    .bind(&req.description)
    .bind(&req.image)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    info!(id, "Material created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

// PUT /api/materials/{id}
#[instrument(skip(db_pool, req))]
pub async fn update_material(
    State(AppState { db_pool }): State<AppState>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<UpdateMaterialRequest>,
) -> Result<Json<MaterialResponse>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::validation("Material name is required"));
    }

    let mut tx = db_pool.begin().await?;

    let category_id = resolve_category(&mut tx, req.category.as_deref()).await?;
    let image = req.image.as_deref().filter(|i| !i.is_empty());

    // Quantity only changes through movements
    let result = sqlx::query(
        r#"UPDATE materials SET
             name = $1,
             sku = $2,
             min_quantity = $3,
             resupply_quantity = $4,
             alert_percentage = $5,
             description = $6,
             is_archived = $7,
             image = COALESCE($8, image),
             category_id = COALESCE($9, category_id)
           WHERE id = $10"#,
    )
    .bind(req.name.trim())
    .bind(&req.sku)
    .bind(req.min_quantity)
    .bind(req.resupply_quantity)
    .bind(req.alert_percentage)
    .bind(&req.description)
    .bind(req.is_archived)
    .bind(image)
    .bind(category_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        // Dropping the transaction rolls back a category created above
        return Err(AppError::not_found("Material not found"));
    }

    let query = format!("{SELECT_MATERIALS} WHERE m.id = $1");
    let material = sqlx::query_as::<_, Material>(&query)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Json(MaterialResponse::from(material)))
}
