//! PostgreSQL-backed `PortfolioRepository` implementation using Diesel.
//!
//! Identifier semantics: the domain treats ids as opaque strings, so any id
//! that does not parse as a UUID simply matches nothing. The store assigns
//! identifiers at insert, mirroring a document collection's behaviour.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{PortfolioRepository, PortfolioStoreError};
use crate::domain::{Attachment, NewPortfolio, Portfolio, PortfolioId};

use super::models::{NewPortfolioRow, PortfolioReplacement, PortfolioRow};
use super::pool::{DbPool, PoolError};
use super::schema::portfolios;

diesel::define_sql_function! {
    /// PostgreSQL `lower()` used for case-insensitive name lookup.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Diesel-backed implementation of the `PortfolioRepository` port.
#[derive(Clone)]
pub struct DieselPortfolioRepository {
    pool: DbPool,
}

impl DieselPortfolioRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PortfolioStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            PortfolioStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> PortfolioStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PortfolioStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => PortfolioStoreError::query("database error"),
        DieselError::NotFound => PortfolioStoreError::query("record not found"),
        _ => PortfolioStoreError::query("database error"),
    }
}

/// Parse an opaque identifier into the store's key shape. Non-UUID input
/// cannot match any stored row.
fn parse_id(id: &PortfolioId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

fn row_to_portfolio(row: PortfolioRow) -> Result<Portfolio, PortfolioStoreError> {
    let image = Attachment::try_new(row.image, row.image_content_type)
        .map_err(|err| PortfolioStoreError::query(format!("stored image pair invalid: {err}")))?;
    let resume = Attachment::try_new(row.resume, row.resume_content_type)
        .map_err(|err| PortfolioStoreError::query(format!("stored resume pair invalid: {err}")))?;

    Ok(Portfolio {
        id: PortfolioId::new(row.id.to_string()),
        name: row.name,
        title: row.title,
        description: row.description,
        image,
        resume,
        username_key: row.username_key,
    })
}

#[async_trait]
impl PortfolioRepository for DieselPortfolioRepository {
    async fn list(&self) -> Result<Vec<Portfolio>, PortfolioStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PortfolioRow> = portfolios::table
            .select(PortfolioRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_portfolio).collect()
    }

    async fn find_by_id(
        &self,
        id: &PortfolioId,
    ) -> Result<Option<Portfolio>, PortfolioStoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(None);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PortfolioRow> = portfolios::table
            .find(key)
            .select(PortfolioRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_portfolio).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Portfolio>, PortfolioStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PortfolioRow> = portfolios::table
            .filter(lower(portfolios::name).eq(name))
            .select(PortfolioRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_portfolio).transpose()
    }

    async fn insert(&self, record: NewPortfolio) -> Result<Portfolio, PortfolioStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // The store assigns the identifier at insert.
        let id = Uuid::new_v4();
        let row = NewPortfolioRow {
            id,
            name: &record.name,
            title: &record.title,
            description: &record.description,
            image: record.image.bytes(),
            image_content_type: record.image.content_type(),
            resume: record.resume.bytes(),
            resume_content_type: record.resume.content_type(),
            username_key: &record.username_key,
        };

        diesel::insert_into(portfolios::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let NewPortfolio {
            name,
            title,
            description,
            image,
            resume,
            username_key,
        } = record;
        Ok(Portfolio {
            id: PortfolioId::new(id.to_string()),
            name,
            title,
            description,
            image,
            resume,
            username_key,
        })
    }

    async fn replace(&self, record: &Portfolio) -> Result<(), PortfolioStoreError> {
        let Some(key) = parse_id(&record.id) else {
            return Ok(());
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = PortfolioReplacement {
            name: &record.name,
            title: &record.title,
            description: &record.description,
            image: record.image.bytes(),
            image_content_type: record.image.content_type(),
            resume: record.resume.bytes(),
            resume_content_type: record.resume.content_type(),
            username_key: &record.username_key,
        };

        // Zero rows updated means a concurrent delete won; the replace
        // contract treats that as a silent no-op.
        diesel::update(portfolios::table.find(key))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &PortfolioId) -> Result<bool, PortfolioStoreError> {
        let Some(key) = parse_id(id) else {
            return Ok(false);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(portfolios::table.find(key))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_failures() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(err, PortfolioStoreError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_failure() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, PortfolioStoreError::Query { .. }));
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("123")]
    fn malformed_ids_match_nothing(#[case] raw: &str) {
        assert!(parse_id(&PortfolioId::new(raw)).is_none());
    }

    #[rstest]
    fn valid_uuid_parses() {
        let id = PortfolioId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert!(parse_id(&id).is_some());
    }

    #[rstest]
    fn corrupt_attachment_pairs_are_rejected_at_the_boundary() {
        let row = PortfolioRow {
            id: Uuid::new_v4(),
            name: "Jane Doe".to_owned(),
            title: String::new(),
            description: String::new(),
            image: vec![1, 2, 3],
            image_content_type: String::new(),
            resume: Vec::new(),
            resume_content_type: String::new(),
            username_key: "jane-doe".to_owned(),
        };

        let err = row_to_portfolio(row).expect_err("mismatched pair");
        assert!(matches!(err, PortfolioStoreError::Query { .. }));
    }
}
