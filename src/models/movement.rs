use sqlx::FromRow;
use chrono::NaiveDate;

/// A row of `movements` joined with the material name.
#[derive(Debug, Clone, FromRow)]
pub struct Movement {
    pub id: i64,
    pub material_id: i64,
    pub material_name: String,
    #[sqlx(rename = "type")]
    pub movement_type: String,
    pub quantity: i32,
    pub date: NaiveDate,
    pub reason: Option<String>,
}
