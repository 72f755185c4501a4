// src/handlers/movement.rs
use axum::{extract::State, http::StatusCode, Json};
use crate::dtos::movement::{CreateMovementRequest, CreateMovementResponse, MovementResponse};
use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::models::movement::Movement;
use crate::state::AppState;
use tracing::{info, instrument};

// ==================== List Movements ====================

#[instrument(skip(db_pool))]
pub async fn list_movements(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<MovementResponse>>, AppError> {
    let movements = sqlx::query_as::<_, Movement>(
        r#"SELECT mov.id, mov.material_id, mat.name AS material_name,
                  mov.type, mov.quantity, mov.date, mov.reason
           FROM movements mov
           JOIN materials mat ON mov.material_id = mat.id
           ORDER BY mov.date DESC, mov.id DESC"#,
    )
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(movements.into_iter().map(MovementResponse::from).collect()))
}

// ==================== Create Movement ====================

#[instrument(skip(db_pool, req), fields(material_id = req.material_id))]
pub async fn create_movement(
    State(AppState { db_pool }): State<AppState>,
    ValidJson(req): ValidJson<CreateMovementRequest>,
) -> Result<(StatusCode, Json<CreateMovementResponse>), AppError> {
    if req.quantity <= 0 {
        return Err(AppError::validation("Quantity must be greater than 0"));
    }

    let mut tx = db_pool.begin().await?;

    // Row lock keeps concurrent movements on the same material serialized
    let (current,): (i32,) =
        sqlx::query_as("SELECT quantity FROM materials WHERE id = $1 FOR UPDATE")
            .bind(req.material_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::not_found("Material not found"))?;

    let updated = req.apply_to(current)?;

    let (id,): (i64,) = sqlx::query_as(
        r#"INSERT INTO movements (material_id, type, quantity, date, reason)
           VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE), $5)
           RETURNING id"#,
    )
    .bind(req.material_id)
    .bind(req.movement_type.as_str())
    .bind(req.quantity)
    .bind(req.date)
    .bind(&req.reason)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE materials SET quantity = $1 WHERE id = $2")
        .bind(updated)
        .bind(req.material_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(id, movement_type = req.movement_type.as_str(), quantity = req.quantity, "Movement recorded");

    Ok((
        StatusCode::CREATED,
        Json(CreateMovementResponse {
            id,
            material_id: req.material_id,
            quantity_after: updated,
        }),
    ))
}
