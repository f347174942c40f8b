//! Persistence adapters implementing the portfolio store port.
//!
//! Two implementations exist: a Diesel/PostgreSQL adapter used whenever a
//! database URL is configured, and an in-memory adapter used as a fallback
//! for local development and by tests.

mod diesel_portfolio_repository;
mod memory_portfolio_repository;
mod models;
mod pool;
pub mod schema;

pub use diesel_portfolio_repository::DieselPortfolioRepository;
pub use memory_portfolio_repository::InMemoryPortfolioRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
