//! Portfolio aggregate and its attachment pair type.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Opaque portfolio identifier assigned by the store at creation.
///
/// The identifier is treated as an uninterpreted string at the domain level;
/// persistence adapters decide what shapes can ever match a stored record, so
/// malformed identifiers simply fail to match rather than raising a separate
/// error class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioId(String);

impl PortfolioId {
    /// Wrap a raw identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PortfolioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for PortfolioId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for PortfolioId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Violations of the attachment pair invariant.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AttachmentPairError {
    /// Bytes are present but no content type accompanies them.
    #[error("attachment bytes require a content type")]
    MissingContentType,
    /// A content type is present but no bytes accompany it.
    #[error("attachment content type requires bytes")]
    MissingBytes,
}

/// Byte payload and content type stored as an inseparable pair.
///
/// ## Invariants
/// - Non-empty bytes never coexist with an empty content type, and vice
///   versa. The empty pair (no bytes, no content type) represents an
///   attachment that was never set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attachment {
    bytes: Vec<u8>,
    content_type: String,
}

impl Attachment {
    /// Construct a pair, enforcing the invariant.
    pub fn try_new(
        bytes: Vec<u8>,
        content_type: impl Into<String>,
    ) -> Result<Self, AttachmentPairError> {
        let content_type = content_type.into();
        if !bytes.is_empty() && content_type.is_empty() {
            return Err(AttachmentPairError::MissingContentType);
        }
        if bytes.is_empty() && !content_type.is_empty() {
            return Err(AttachmentPairError::MissingBytes);
        }
        Ok(Self {
            bytes,
            content_type,
        })
    }

    /// The never-set attachment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a pair from a buffered upload. A zero-length upload collapses
    /// to the empty pair so the declared content type cannot outlive the
    /// bytes it described.
    pub fn from_upload(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        if bytes.is_empty() {
            return Self::empty();
        }
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// True when no bytes are stored.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Stored payload.
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Declared MIME type, empty for the never-set attachment.
    pub fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    /// Decompose into bytes and content type.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.bytes, self.content_type)
    }
}

/// Stored portfolio record.
///
/// ## Invariants
/// - `username_key` always equals `username_key(name)`; the service
///   recomputes it on every create and update, never trusting client input.
/// - `id` is assigned exactly once, by the store, and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    pub id: PortfolioId,
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Attachment,
    pub resume: Attachment,
    pub username_key: String,
}

/// Portfolio fields ready for insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPortfolio {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: Attachment,
    pub resume: Attachment,
    pub username_key: String,
}
