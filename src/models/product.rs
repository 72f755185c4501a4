use sqlx::{FromRow, PgPool};
use chrono::{DateTime, Utc};

use crate::dtos::product::NewProduct;

/// A row of the `produtos` table.
#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub nome: String,
    pub descricao: Option<String>,
    pub quantidade: i32,
    pub preco_custo: Option<f64>,
    pub preco_venda: Option<f64>,
    pub data_cadastro: Option<DateTime<Utc>>,
}

impl Product {
    /// Full scan of `produtos`, ordered by id.
    pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, nome, descricao, quantidade,
                    preco_custo::FLOAT8 AS preco_custo,
                    preco_venda::FLOAT8 AS preco_venda,
                    data_cadastro
             FROM produtos ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Inserts a product and returns its database-assigned id.
    pub async fn insert(pool: &PgPool, product: &NewProduct) -> Result<i64, sqlx::Error> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO produtos (nome, preco_venda, quantidade)
             VALUES ($1, $2::FLOAT8, $3) RETURNING id",
        )
        .bind(&product.nome)
        .bind(product.preco_venda)
        .bind(product.quantidade)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }
}
