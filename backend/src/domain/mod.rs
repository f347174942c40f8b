//! Domain primitives and the portfolio service.
//!
//! Purpose: define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable where practical and document
//! invariants in each type's Rustdoc. Everything here is transport agnostic;
//! inbound adapters map [`Error`] into protocol-specific envelopes.

pub mod error;
pub mod portfolio;
pub mod portfolio_service;
pub mod ports;
pub mod username;

pub use self::error::{Error, ErrorCode};
pub use self::portfolio::{
    Attachment, AttachmentPairError, NewPortfolio, Portfolio, PortfolioId,
};
pub use self::portfolio_service::PortfolioService;
pub use self::username::{lookup_name, username_key};

/// Convenient domain result alias.
pub type DomainResult<T> = Result<T, Error>;
