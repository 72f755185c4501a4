use sqlx::FromRow;
use chrono::{DateTime, Utc};

/// A row of `materials` joined with its category name.
#[derive(Debug, Clone, FromRow)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub quantity: i32,
    pub min_quantity: i32,
    pub resupply_quantity: i32,
    pub alert_percentage: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
}
