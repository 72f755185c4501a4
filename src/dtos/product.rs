// src/dtos/product.rs
use serde::Deserialize;

use crate::error::AppError;

/// Fields posted by the add-product form. Everything arrives as text.
#[derive(Debug, Default, Deserialize)]
pub struct AddProductForm {
    pub nome: Option<String>,
    pub preco: Option<String>,
    pub quantidade: Option<String>,
}

/// A product ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub nome: String,
    pub preco_venda: f64,
    pub quantidade: i32,
}

impl TryFrom<AddProductForm> for NewProduct {
    type Error = AppError;

    fn try_from(form: AddProductForm) -> Result<Self, Self::Error> {
        let nome = form
            .nome
            .ok_or_else(|| AppError::validation("Field 'nome' is required"))?;
        let preco_venda = parse_price(form.preco.as_deref())?;
        let quantidade = parse_quantity(form.quantidade.as_deref())?;

        Ok(Self {
            nome,
            preco_venda,
            quantidade,
        })
    }
}

/// Largest magnitude a `NUMERIC(10, 2)` column can hold, exclusive.
pub const PRICE_LIMIT: f64 = 1e8;

/// Accepts `9.99` as well as the Brazilian `9,99`.
pub fn parse_price(raw: Option<&str>) -> Result<f64, AppError> {
    let raw = raw.ok_or_else(|| AppError::validation("Field 'preco' is required"))?;
    let normalized = raw.trim().replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            // The column rounds to cents, so 99999999.996 would overflow too
            if ((value * 100.0).round() / 100.0).abs() >= PRICE_LIMIT {
                return Err(AppError::validation(format!(
                    "Field 'preco' must be below {PRICE_LIMIT:.0}, got {raw:?}"
                )));
            }
            Ok(value)
        }
        _ => Err(AppError::validation(format!(
            "Field 'preco' must be a number, got {raw:?}"
        ))),
    }
}

pub fn parse_quantity(raw: Option<&str>) -> Result<i32, AppError> {
    let raw = raw.ok_or_else(|| AppError::validation("Field 'quantidade' is required"))?;

    raw.trim().parse::<i32>().map_err(|_| {
        AppError::validation(format!("Field 'quantidade' must be an integer, got {raw:?}"))
    })
}
