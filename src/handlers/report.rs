// src/handlers/report.rs
use axum::{extract::State, Json};
use crate::dtos::material::UNCATEGORIZED;
use crate::dtos::report::{CategoryCount, InventorySummary, MovedMaterial};
use crate::error::AppError;
use crate::state::AppState;
use tracing::instrument;

/// Materials above this quantity count as high stock.
pub const HIGH_STOCK_THRESHOLD: i32 = 50;
const TOP_MOVED_LIMIT: i64 = 3;

// GET /api/reports/summary
#[instrument(skip(db_pool))]
pub async fn inventory_summary(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<InventorySummary>, AppError> {
    let (total_materials, out_of_stock, high_stock): (i64, i64, i64) = sqlx::query_as(
        r#"SELECT COUNT(*),
                  COUNT(*) FILTER (WHERE quantity = 0),
                  COUNT(*) FILTER (WHERE quantity > $1)
           FROM materials
           WHERE NOT is_archived"#,
    )
    .bind(HIGH_STOCK_THRESHOLD)
    .fetch_one(&db_pool)
    .await?;

    let by_category = sqlx::query_as::<_, (String, i64)>(
        r#"SELECT COALESCE(c.name, $1) AS category, COUNT(*) AS count
           FROM materials m
           LEFT JOIN categories c ON m.category_id = c.id
           WHERE NOT m.is_archived
           GROUP BY 1
           ORDER BY 2 DESC, 1"#,
    )
    .bind(UNCATEGORIZED)
    .fetch_all(&db_pool)
    .await?
    .into_iter()
    .map(|(category, count)| CategoryCount { category, count })
    .collect();

    let top_moved = sqlx::query_as::<_, (String, i64)>(
        r#"SELECT mat.name, SUM(mov.quantity)::BIGINT AS total
           FROM movements mov
           JOIN materials mat ON mov.material_id = mat.id
           GROUP BY mat.id, mat.name
           ORDER BY total DESC, mat.name
           LIMIT $1"#,
    )
    .bind(TOP_MOVED_LIMIT)
    .fetch_all(&db_pool)
    .await?
    .into_iter()
    .map(|(material_name, total_quantity)| MovedMaterial {
        material_name,
        total_quantity,
    })
    .collect();

    Ok(Json(InventorySummary {
        total_materials,
        out_of_stock,
        high_stock,
        by_category,
        top_moved,
    }))
}
