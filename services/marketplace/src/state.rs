//! Application state shared across handlers

use sqlx::PgPool;

use crate::notify::Notifier;
use crate::repositories::{CartRepository, OrderRepository, ProductRepository, UserRepository};
use crate::token::TokenService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tokens: TokenService,
    pub notifier: Notifier,
    pub users: UserRepository,
    pub products: ProductRepository,
    pub cart: CartRepository,
    pub orders: OrderRepository,
}

impl AppState {
    /// Assemble the state from a pool and a token service
    pub fn new(pool: PgPool, tokens: TokenService) -> Self {
        AppState {
            users: UserRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            cart: CartRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
            notifier: Notifier::new(64),
            tokens,
        }
    }
}
