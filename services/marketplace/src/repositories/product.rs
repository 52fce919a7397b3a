//! Product listing repository for database operations

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::{NewProduct, Product, ProductQuery, UpdateProduct};

const PRODUCT_COLUMNS: &str =
    "id, owner_id, title, description, category, price, image_url, created_at";

/// Product listing repository
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a listing owned by `owner_id`
    pub async fn create(&self, owner_id: Uuid, new_product: &NewProduct) -> sqlx::Result<Product> {
        info!("Creating listing '{}' for {}", new_product.title, owner_id);

        sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (owner_id, title, description, category, price, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PRODUCT_COLUMNS}
            "#,
        ))
        .bind(owner_id)
        .bind(&new_product.title)
        .bind(&new_product.description)
        .bind(&new_product.category)
        .bind(new_product.price)
        .bind(&new_product.image_url)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a listing by ID
    pub async fn find_by_id(&self, id: Uuid) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1",
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Search listings by title substring and/or exact category
    pub async fn search(&self, query: &ProductQuery) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR category = $2)
            ORDER BY created_at DESC
            "#,
        ))
        .bind(&query.q)
        .bind(&query.category)
        .fetch_all(&self.pool)
        .await
    }

    /// List the listings owned by `owner_id`
    pub async fn list_by_owner(&self, owner_id: Uuid) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Update a listing; the owner filter makes a foreign id look absent
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: &UpdateProduct,
    ) -> sqlx::Result<Option<Product>> {
        sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                category = COALESCE($5, category),
                price = COALESCE($6, price),
                image_url = COALESCE($7, image_url)
            WHERE id = $1 AND owner_id = $2
            RETURNING {PRODUCT_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(owner_id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.category)
        .bind(changes.price)
        .bind(&changes.image_url)
        .fetch_optional(&self.pool)
        .await
    }

    /// Delete a listing; returns false when it does not exist or the caller
    /// does not own it
    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
