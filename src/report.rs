// src/report.rs
//! Console product report: the listing query rendered as fixed-width text.

use std::fmt::Write;

use sqlx::PgPool;
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::product::Product;
use crate::views::format_price;

pub const ID_WIDTH: usize = 5;
pub const NAME_WIDTH: usize = 30;
pub const PRICE_WIDTH: usize = 10;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Header, separator, then one line per product (id, name, sale price).
pub fn render_report(products: &[Product]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}",
        "ID", "Produto", "Preço"
    );
    out.push_str(&"-".repeat(ID_WIDTH + NAME_WIDTH + PRICE_WIDTH));
    out.push('\n');

    for product in products {
        let _ = writeln!(
            out,
            "{:<ID_WIDTH$}{:<NAME_WIDTH$}{:<PRICE_WIDTH$}",
            product.id,
            product.nome,
            format_price(product.preco_venda),
        );
    }

    out
}

/// Runs the listing query and renders it.
pub async fn generate(pool: &PgPool) -> Result<String, ReportError> {
    let products = Product::fetch_all(pool).await?;
    tracing::debug!(count = products.len(), "Fetched products for report");
    Ok(render_report(&products))
}
