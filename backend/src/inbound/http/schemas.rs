//! Shared OpenAPI schema types for the HTTP adapter.

use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope documented for failure responses.
///
/// Mirrors the serialized shape of [`crate::domain::Error`] without pulling
/// OpenAPI derives into the domain.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: String,
    /// Human-readable message.
    #[schema(example = "Name is required.")]
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
