// src/dtos/material.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::material::Material;

pub const UNCATEGORIZED: &str = "Sem Categoria";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStatus {
    Archived,
    OutOfStock,
    Critical,
    Resupply,
    Ok,
}

impl MaterialStatus {
    /// Stock level classification, checked in order: archived, empty,
    /// below minimum, below minimum plus resupply margin.
    pub fn classify(quantity: i32, min_quantity: i32, resupply_quantity: i32, is_archived: bool) -> Self {
        if is_archived {
            MaterialStatus::Archived
        } else if quantity == 0 {
            MaterialStatus::OutOfStock
        } else if quantity < min_quantity {
            MaterialStatus::Critical
        } else if quantity < min_quantity.saturating_add(resupply_quantity) {
            MaterialStatus::Resupply
        } else {
            MaterialStatus::Ok
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMaterialRequest {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default, alias = "minQuantity")]
    pub min_quantity: i32,
    #[serde(default, alias = "resupplyQuantity")]
    pub resupply_quantity: i32,
    #[serde(default, alias = "alertPercentage")]
    pub alert_percentage: i32,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMaterialRequest {
    pub name: String,
    #[serde(default)]
    pub sku: String,
    pub category: Option<String>,
    #[serde(default, alias = "minQuantity")]
    pub min_quantity: i32,
    #[serde(default, alias = "resupplyQuantity")]
    pub resupply_quantity: i32,
    #[serde(default, alias = "alertPercentage")]
    pub alert_percentage: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    #[serde(default, alias = "isArchived")]
    pub is_archived: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    pub id: i64,
    pub name: String,
    pub sku: String,
    pub category_id: Option<i64>,
    pub category: String,
    pub quantity: i32,
    pub min_quantity: i32,
    pub resupply_quantity: i32,
    pub alert_percentage: i32,
    pub description: Option<String>,
    pub image: Option<String>,
    pub is_archived: bool,
    pub status: MaterialStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Material> for MaterialResponse {
    fn from(material: Material) -> Self {
        let status = MaterialStatus::classify(
            material.quantity,
            material.min_quantity,
            material.resupply_quantity,
            material.is_archived,
        );

        Self {
            id: material.id,
            name: material.name,
            sku: material.sku,
            category_id: material.category_id,
            category: material
                .category_name
                .unwrap_or_else(|| UNCATEGORIZED.to_string()),
            quantity: material.quantity,
            min_quantity: material.min_quantity,
            resupply_quantity: material.resupply_quantity,
            alert_percentage: material.alert_percentage,
            description: material.description,
            image: material.image,
            is_archived: material.is_archived,
            status,
            created_at: material.created_at,
        }
    }
}

/// Trims a category name, treating blank input as "no category".
pub fn normalize_category(category: Option<&str>) -> Option<&str> {
    category.map(str::trim).filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(quantity: i32, min: i32, resupply: i32, archived: bool) -> Material {
        Material {
            id: 7,
            name: "Parafuso".to_string(),
            sku: "PRF-01".to_string(),
            category_id: None,
            category_name: None,
            quantity,
            min_quantity: min,
            resupply_quantity: resupply,
            alert_percentage: 10,
            description: None,
            image: None,
            is_archived: archived,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn archived_wins_over_stock_level() {
        assert_eq!(MaterialStatus::classify(0, 5, 5, true), MaterialStatus::Archived);
    }

    #[test]
    fn stock_levels_are_classified_in_order() {
        assert_eq!(MaterialStatus::classify(0, 5, 5, false), MaterialStatus::OutOfStock);
        assert_eq!(MaterialStatus::classify(4, 5, 5, false), MaterialStatus::Critical);
        assert_eq!(MaterialStatus::classify(9, 5, 5, false), MaterialStatus::Resupply);
        assert_eq!(MaterialStatus::classify(10, 5, 5, false), MaterialStatus::Ok);
    }

    #[test]
    fn response_falls_back_to_uncategorized() {
        let response = MaterialResponse::from(material(3, 1, 1, false));
        assert_eq!(response.category, UNCATEGORIZED);
        assert_eq!(response.status, MaterialStatus::Ok);
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_value(MaterialStatus::OutOfStock).unwrap();
        assert_eq!(json, "out_of_stock");
    }

    #[test]
    fn camel_case_client_payload_keeps_thresholds() {
        let req: CreateMaterialRequest = serde_json::from_str(
            r#"{"name": "Parafuso", "sku": "PRF-01", "category": "Ferragens", "quantity": 12,
                "minQuantity": 5, "resupplyQuantity": 3, "alertPercentage": 20,
                "description": "", "image": null}"#,
        )
        .unwrap();

        assert_eq!(req.min_quantity, 5);
        assert_eq!(req.resupply_quantity, 3);
        assert_eq!(req.alert_percentage, 20);
        assert_eq!(req.image, None);
    }

    #[test]
    fn archive_toggle_accepts_both_spellings() {
        let camel: UpdateMaterialRequest =
            serde_json::from_str(r#"{"name": "Parafuso", "isArchived": true, "minQuantity": 2}"#).unwrap();
        let snake: UpdateMaterialRequest =
            serde_json::from_str(r#"{"name": "Parafuso", "is_archived": true, "min_quantity": 2}"#).unwrap();

        assert!(camel.is_archived && snake.is_archived);
        assert_eq!(camel.min_quantity, snake.min_quantity);
    }

    #[test]
    fn blank_category_means_none() {
        assert_eq!(normalize_category(Some("  ")), None);
        assert_eq!(normalize_category(Some(" Ferragens ")), Some("Ferragens"));
        assert_eq!(normalize_category(None), None);
    }
}
