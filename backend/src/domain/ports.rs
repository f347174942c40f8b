//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`PortfolioQuery`], [`PortfolioCommand`]) describe what
//! inbound adapters may ask of the domain. The driven port
//! ([`PortfolioRepository`]) describes how the domain expects to interact
//! with the store. The driven port exposes a strongly typed error so
//! adapters map their failures into predictable variants instead of
//! stringly-typed ones.

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::{Attachment, Error, NewPortfolio, Portfolio, PortfolioId};

/// Errors surfaced by persistence adapters for the portfolio collection.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PortfolioStoreError {
    /// Store connectivity or pool checkout failures.
    #[error("portfolio store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("portfolio store query failed: {message}")]
    Query { message: String },
}

impl PortfolioStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Buffered upload handed to the service by an inbound adapter.
///
/// The declared content type is whatever the client sent; validation happens
/// in the service, field by field, before any store interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// Validated-at-the-service inputs for portfolio creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePortfolio {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Option<AttachmentUpload>,
    pub resume: Option<AttachmentUpload>,
}

/// Inputs for a partial, attachment-preserving update. `None` uploads carry
/// the previous pair forward unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePortfolio {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Option<AttachmentUpload>,
    pub resume: Option<AttachmentUpload>,
}

/// Driving port for read operations.
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    /// Every stored portfolio, store-native order, no pagination.
    async fn list(&self) -> Result<Vec<Portfolio>, Error>;

    /// The portfolio matching `id`, or `NotFound`.
    async fn get(&self, id: &PortfolioId) -> Result<Portfolio, Error>;

    /// The portfolio whose name matches the denormalized `key`, or
    /// `NotFound`. First match wins on key collisions.
    async fn get_by_username(&self, key: &str) -> Result<Portfolio, Error>;

    /// The image pair for `id`; `NotFound` when the record is absent or the
    /// attachment is empty.
    async fn image(&self, id: &PortfolioId) -> Result<Attachment, Error>;

    /// The résumé pair for `id`; `NotFound` when the record is absent or the
    /// attachment is empty.
    async fn resume(&self, id: &PortfolioId) -> Result<Attachment, Error>;
}

/// Driving port for mutations.
#[async_trait]
pub trait PortfolioCommand: Send + Sync {
    /// Validate and persist a new portfolio, returning the stored record
    /// with its assigned identifier.
    async fn create(&self, request: CreatePortfolio) -> Result<Portfolio, Error>;

    /// Validate and persist a full replacement for `id`, carrying forward
    /// any attachment pair the request omits.
    async fn update(&self, id: &PortfolioId, request: UpdatePortfolio) -> Result<(), Error>;

    /// Remove the record matching `id`; `NotFound` when nothing matched.
    async fn delete(&self, id: &PortfolioId) -> Result<(), Error>;
}

/// Driven port over the portfolio collection's CRUD contract.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    /// All records in store-native order.
    async fn list(&self) -> Result<Vec<Portfolio>, PortfolioStoreError>;

    /// Record matching `id`; identifiers the store cannot interpret simply
    /// do not match.
    async fn find_by_id(
        &self,
        id: &PortfolioId,
    ) -> Result<Option<Portfolio>, PortfolioStoreError>;

    /// First record whose lowercased name equals `name` (already lowercased
    /// by the caller). Ordering is store-native, so collisions resolve
    /// non-deterministically.
    async fn find_by_name(&self, name: &str) -> Result<Option<Portfolio>, PortfolioStoreError>;

    /// Insert a record, assigning a fresh identifier.
    async fn insert(&self, record: NewPortfolio) -> Result<Portfolio, PortfolioStoreError>;

    /// Replace the full document keyed by `record.id`. Replacing a record
    /// deleted by a concurrent writer is a silent no-op, matching the
    /// last-write-wins contract.
    async fn replace(&self, record: &Portfolio) -> Result<(), PortfolioStoreError>;

    /// Delete by identifier, reporting whether a record was removed.
    async fn delete(&self, id: &PortfolioId) -> Result<bool, PortfolioStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn store_error_helpers_carry_messages() {
        let conn = PortfolioStoreError::connection("refused");
        let query = PortfolioStoreError::query("syntax");

        assert!(matches!(conn, PortfolioStoreError::Connection { .. }));
        assert!(conn.to_string().contains("refused"));
        assert!(matches!(query, PortfolioStoreError::Query { .. }));
        assert!(query.to_string().contains("syntax"));
    }
}
