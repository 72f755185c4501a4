// src/dtos/movement.rs
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::movement::Movement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    /// Stock in
    Entrada,
    /// Stock out
    Saida,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Entrada => "entrada",
            MovementType::Saida => "saida",
        }
    }

    /// Signed change applied to the material's stock.
    pub fn delta(&self, quantity: i32) -> i32 {
        match self {
            MovementType::Entrada => quantity,
            MovementType::Saida => -quantity,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateMovementRequest {
    pub material_id: i64,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    pub quantity: i32,
    pub date: Option<NaiveDate>,
    pub reason: Option<String>,
}

impl CreateMovementRequest {
    /// Checks the request against the material's current stock and returns the new stock level.
    pub fn apply_to(&self, current_stock: i32) -> Result<i32, AppError> {
        if self.quantity <= 0 {
            return Err(AppError::validation("Quantity must be greater than 0"));
        }

        let updated = current_stock
            .checked_add(self.movement_type.delta(self.quantity))
            .ok_or_else(|| AppError::validation("Quantity out of range"))?;

        if updated < 0 {
            return Err(AppError::validation(format!(
                "Insufficient stock. Available: {}, Requested: {}",
                current_stock, self.quantity
            )));
        }

        Ok(updated)
    }
}

#[derive(Debug, Serialize)]
pub struct MovementResponse {
    pub id: i64,
    pub material_id: i64,
    pub material_name: String,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub quantity: i32,
    pub date: NaiveDate,
    pub reason: Option<String>,
}

impl From<Movement> for MovementResponse {
    fn from(m: Movement) -> Self {
        Self {
            id: m.id,
            material_id: m.material_id,
            material_name: m.material_name,
            movement_type: m.movement_type,
            quantity: m.quantity,
            date: m.date,
            reason: m.reason,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateMovementResponse {
    pub id: i64,
    pub material_id: i64,
    pub quantity_after: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(movement_type: MovementType, quantity: i32) -> CreateMovementRequest {
        CreateMovementRequest {
            material_id: 1,
            movement_type,
            quantity,
            date: None,
            reason: None,
        }
    }

    #[test]
    fn entrada_adds_stock() {
        assert_eq!(request(MovementType::Entrada, 5).apply_to(10).unwrap(), 15);
    }

    #[test]
    fn saida_removes_stock() {
        assert_eq!(request(MovementType::Saida, 10).apply_to(10).unwrap(), 0);
    }

    #[test]
    fn saida_beyond_stock_is_rejected() {
        let err = request(MovementType::Saida, 11).apply_to(10).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.starts_with("Insufficient stock")));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        assert!(request(MovementType::Entrada, 0).apply_to(10).is_err());
        assert!(request(MovementType::Saida, -3).apply_to(10).is_err());
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(request(MovementType::Entrada, 1).apply_to(i32::MAX).is_err());
    }

    #[test]
    fn type_is_parsed_from_json() {
        let req: CreateMovementRequest =
            serde_json::from_str(r#"{"material_id": 3, "type": "saida", "quantity": 2}"#).unwrap();
        assert_eq!(req.movement_type, MovementType::Saida);
        assert_eq!(req.date, None);
    }

    #[test]
    fn unknown_type_fails_to_deserialize() {
        let err = serde_json::from_str::<CreateMovementRequest>(
            r#"{"material_id": 3, "type": "transfer", "quantity": 2}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }
}
