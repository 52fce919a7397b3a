//! Cart repository for database operations

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CartItem, CartLine};

/// Cart repository
#[derive(Clone)]
pub struct CartRepository {
    pool: PgPool,
}

impl CartRepository {
    /// Create a new cart repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's cart, joined with listing title and price
    pub async fn list(&self, owner_id: Uuid) -> sqlx::Result<Vec<CartLine>> {
        sqlx::query_as::<_, CartLine>(
            r#"
            SELECT c.id, c.product_id, p.title, p.price, c.quantity
            FROM cart_items c
            JOIN products p ON p.id = c.product_id
            WHERE c.owner_id = $1
            ORDER BY c.created_at
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Add a listing to the caller's cart
    ///
    /// An unknown product surfaces as a foreign-key violation.
    pub async fn add(
        &self,
        owner_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> sqlx::Result<CartItem> {
        sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart_items (owner_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, owner_id, product_id, quantity, created_at
            "#,
        )
        .bind(owner_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
    }

    /// Remove a cart item; returns false when it does not exist or the
    /// caller does not own it
    pub async fn remove(&self, owner_id: Uuid, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
