//! Common library for the EcoFinds marketplace
//!
//! This crate provides shared infrastructure used by the marketplace
//! service: PostgreSQL connection pooling, health checks, and the
//! database error types.

pub mod database;
pub mod error;
