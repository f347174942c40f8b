//! In-memory `PortfolioRepository` for local development and tests.
//!
//! Used as the fallback store when no database URL is configured. Records
//! live in insertion order, so collision lookups resolve to the earliest
//! insert, which keeps the "first match wins" behaviour observable in tests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{PortfolioRepository, PortfolioStoreError};
use crate::domain::{NewPortfolio, Portfolio, PortfolioId};

/// Process-local portfolio store.
#[derive(Default)]
pub struct InMemoryPortfolioRepository {
    records: Mutex<Vec<Portfolio>>,
}

impl InMemoryPortfolioRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_records<T>(&self, f: impl FnOnce(&mut Vec<Portfolio>) -> T) -> T {
        // A poisoned lock only means another request panicked mid-mutation;
        // the Vec itself is still structurally sound.
        let mut guard = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn list(&self) -> Result<Vec<Portfolio>, PortfolioStoreError> {
        Ok(self.with_records(|records| records.clone()))
    }

    async fn find_by_id(
        &self,
        id: &PortfolioId,
    ) -> Result<Option<Portfolio>, PortfolioStoreError> {
        Ok(self.with_records(|records| {
            records.iter().find(|record| record.id == *id).cloned()
        }))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Portfolio>, PortfolioStoreError> {
        Ok(self.with_records(|records| {
            records
                .iter()
                .find(|record| record.name.to_lowercase() == name)
                .cloned()
        }))
    }

    async fn insert(&self, record: NewPortfolio) -> Result<Portfolio, PortfolioStoreError> {
        let NewPortfolio {
            name,
            title,
            description,
            image,
            resume,
            username_key,
        } = record;
        let stored = Portfolio {
            id: PortfolioId::new(Uuid::new_v4().to_string()),
            name,
            title,
            description,
            image,
            resume,
            username_key,
        };
        self.with_records(|records| records.push(stored.clone()));
        Ok(stored)
    }

    async fn replace(&self, record: &Portfolio) -> Result<(), PortfolioStoreError> {
        self.with_records(|records| {
            if let Some(slot) = records.iter_mut().find(|existing| existing.id == record.id) {
                *slot = record.clone();
            }
        });
        Ok(())
    }

    async fn delete(&self, id: &PortfolioId) -> Result<bool, PortfolioStoreError> {
        Ok(self.with_records(|records| {
            let before = records.len();
            records.retain(|record| record.id != *id);
            records.len() < before
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Attachment;
    use actix_rt::System;
    use rstest::rstest;

    fn draft(name: &str) -> NewPortfolio {
        NewPortfolio {
            name: name.to_owned(),
            title: String::new(),
            description: String::new(),
            image: Attachment::from_upload(vec![1], "image/png"),
            resume: Attachment::from_upload(vec![2], "application/pdf"),
            username_key: crate::domain::username_key(name),
        }
    }

    #[rstest]
    fn insert_assigns_distinct_ids() {
        System::new().block_on(async {
            let repo = InMemoryPortfolioRepository::new();
            let first = repo.insert(draft("Jane Doe")).await.expect("insert");
            let second = repo.insert(draft("Jane Doe")).await.expect("insert");
            assert_ne!(first.id, second.id);
        });
    }

    #[rstest]
    fn name_lookup_returns_first_match() {
        System::new().block_on(async {
            let repo = InMemoryPortfolioRepository::new();
            let first = repo.insert(draft("Jane Doe")).await.expect("insert");
            repo.insert(draft("jane doe")).await.expect("insert");

            let found = repo
                .find_by_name("jane doe")
                .await
                .expect("lookup")
                .expect("match");
            assert_eq!(found.id, first.id);
        });
    }

    #[rstest]
    fn delete_reports_whether_anything_was_removed() {
        System::new().block_on(async {
            let repo = InMemoryPortfolioRepository::new();
            let stored = repo.insert(draft("Jane Doe")).await.expect("insert");

            assert!(repo.delete(&stored.id).await.expect("delete"));
            assert!(!repo.delete(&stored.id).await.expect("delete again"));
        });
    }

    #[rstest]
    fn replace_of_missing_record_is_a_no_op() {
        System::new().block_on(async {
            let repo = InMemoryPortfolioRepository::new();
            let mut ghost = repo.insert(draft("Jane Doe")).await.expect("insert");
            repo.delete(&ghost.id).await.expect("delete");

            ghost.title = "Engineer".to_owned();
            repo.replace(&ghost).await.expect("replace");
            assert!(repo.list().await.expect("list").is_empty());
        });
    }
}
