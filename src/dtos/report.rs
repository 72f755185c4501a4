// src/dtos/report.rs
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct MovedMaterial {
    pub material_name: String,
    pub total_quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct InventorySummary {
    pub total_materials: i64,
    pub out_of_stock: i64,
    pub high_stock: i64,
    pub by_category: Vec<CategoryCount>,
    pub top_moved: Vec<MovedMaterial>,
}
