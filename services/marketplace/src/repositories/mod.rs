//! Repositories for database operations
//!
//! Every owner-scoped mutation filters on `owner_id` in the statement
//! itself, so a non-owner simply affects zero rows.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use user::UserRepository;
