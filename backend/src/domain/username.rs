//! Username normalization shared by storage and lookup.
//!
//! Two directions must stay consistent: storage-time normalization derives
//! the public `usernameKey` from a display name, and lookup-time
//! denormalization turns an incoming key back into a comparable name. The
//! two are exact inverses for names made of single-space-separated words;
//! multi-space or punctuation-bearing names are a documented ambiguity.

/// Storage-time normalization: trim, lowercase, spaces to hyphens.
///
/// # Examples
/// ```
/// use portfolio_api::domain::username_key;
///
/// assert_eq!(username_key("  Jane Doe "), "jane-doe");
/// ```
pub fn username_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

/// Lookup-time denormalization: hyphens to spaces, trim, lowercase.
///
/// The result is compared against live portfolio names, not against stored
/// keys, so it must mirror [`username_key`] exactly on its domain.
pub fn lookup_name(key: &str) -> String {
    key.replace('-', " ").trim().to_lowercase()
}
