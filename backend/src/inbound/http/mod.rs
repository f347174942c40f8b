//! HTTP inbound adapter exposing the portfolio REST endpoints.

pub mod error;
pub mod health;
pub mod portfolios;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
