//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; the
//! `diesel print-schema` command can regenerate them from a live database.

diesel::table! {
    /// Portfolio records with embedded binary attachments.
    ///
    /// Attachments live inline as `bytea` columns, which bounds acceptable
    /// attachment size to what fits comfortably in a single row and in
    /// process memory.
    portfolios (id) {
        /// Primary key: UUID v4 assigned at insert.
        id -> Uuid,
        /// Display name as supplied by the client.
        name -> Text,
        /// Optional job title, empty when unset.
        title -> Text,
        /// Optional free-form description, empty when unset.
        description -> Text,
        /// Profile image payload, empty when never set.
        image -> Bytea,
        /// MIME type paired with `image`, empty when never set.
        image_content_type -> Text,
        /// Résumé payload, empty when never set.
        resume -> Bytea,
        /// MIME type paired with `resume`, empty when never set.
        resume_content_type -> Text,
        /// Normalized lookup key derived from `name`.
        username_key -> Text,
    }
}
