//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements for
//! queries and mutations.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::portfolios;

/// Row struct for reading from the portfolios table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = portfolios)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PortfolioRow {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Vec<u8>,
    pub image_content_type: String,
    pub resume: Vec<u8>,
    pub resume_content_type: String,
    pub username_key: String,
}

/// Insertable struct for creating new portfolio records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = portfolios)]
pub(crate) struct NewPortfolioRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a [u8],
    pub image_content_type: &'a str,
    pub resume: &'a [u8],
    pub resume_content_type: &'a str,
    pub username_key: &'a str,
}

/// Changeset replacing the full document on update.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = portfolios)]
pub(crate) struct PortfolioReplacement<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub image: &'a [u8],
    pub image_content_type: &'a str,
    pub resume: &'a [u8],
    pub resume_content_type: &'a str,
    pub username_key: &'a str,
}
