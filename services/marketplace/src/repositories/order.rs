//! Order repository for database operations

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::Order;

/// Order repository
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's orders, newest first
    pub async fn list(&self, owner_id: Uuid) -> sqlx::Result<Vec<Order>> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, owner_id, product_id, purchased_at
            FROM orders
            WHERE owner_id = $1
            ORDER BY purchased_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Convert the caller's cart into orders
    ///
    /// The copy and the cart clear run inside one transaction: either both
    /// take effect or neither does. Returns the number of orders created,
    /// one per cart row.
    pub async fn checkout(&self, owner_id: Uuid) -> sqlx::Result<u64> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query(
            r#"
            INSERT INTO orders (owner_id, product_id)
            SELECT owner_id, product_id
            FROM cart_items
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        sqlx::query("DELETE FROM cart_items WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Checkout for {} created {} orders", owner_id, created);
        Ok(created)
    }
}
