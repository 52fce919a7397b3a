//! Marketplace service models

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

use serde::Serialize;

// Re-export for convenience
pub use cart::{CartItem, CartLine, NewCartItem};
pub use order::Order;
pub use product::{NewProduct, Product, ProductQuery, UpdateProduct};
pub use user::{LoginCredentials, NewUser, UpdateUser, User};

/// Envelope for list responses: `{"items": [...]}`
#[derive(Debug, Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}
