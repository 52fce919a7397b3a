//! Order model
//!
//! Orders are created only by checkout, as a snapshot of the caller's cart,
//! and are immutable thereafter.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Order entity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub product_id: Uuid,
    pub purchased_at: DateTime<Utc>,
}
