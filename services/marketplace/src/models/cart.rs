//! Cart item model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cart item entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItem {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// Cart item joined with its listing, as returned by `GET /cart`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub title: String,
    pub price: f64,
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Add-to-cart payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewCartItem {
    pub product_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_defaults_to_one() {
        let item: NewCartItem =
            serde_json::from_str(r#"{"product_id":"4b4a5b6c-0000-0000-0000-000000000000"}"#)
                .unwrap();
        assert_eq!(item.quantity, 1);
    }
}
