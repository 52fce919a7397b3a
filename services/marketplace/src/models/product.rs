//! Product listing model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Product listing entity
///
/// `owner_id` is set at creation from the authenticated caller and is
/// immutable afterwards; no update path touches it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// New listing payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// Listing update payload; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

/// Search filters for `GET /products`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// Substring match against the title
    pub q: Option<String>,
    /// Exact category match
    pub category: Option<String>,
}
