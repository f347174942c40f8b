//! Process settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Origins permitted by default: the local development hosts the frontend
/// is served from.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:5050",
    "http://localhost:5173",
    "http://localhost:8080",
];

/// Configuration values controlling the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTFOLIO")]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. When unset the server falls back to the
    /// in-memory store, which only suits local development and tests.
    pub database_url: Option<String>,
    /// Comma-separated list of origins allowed by CORS.
    pub allowed_origins: Option<String>,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Return the allowed CORS origins, falling back to the local
    /// development hosts.
    pub fn allowed_origins(&self) -> Vec<String> {
        match self.allowed_origins.as_deref() {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| (*origin).to_owned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(allowed_origins: Option<&str>) -> ServerSettings {
        ServerSettings {
            bind_addr: None,
            database_url: None,
            allowed_origins: allowed_origins.map(ToOwned::to_owned),
        }
    }

    #[rstest]
    fn defaults_cover_local_development() {
        let settings = settings(None);
        assert_eq!(settings.bind_addr(), DEFAULT_BIND_ADDR);
        assert!(settings.database_url().is_none());
        assert_eq!(settings.allowed_origins().len(), DEFAULT_ALLOWED_ORIGINS.len());
    }

    #[rstest]
    fn origin_list_is_split_and_trimmed() {
        let settings = settings(Some("https://a.example , https://b.example,"));
        assert_eq!(
            settings.allowed_origins(),
            vec![
                "https://a.example".to_owned(),
                "https://b.example".to_owned()
            ]
        );
    }
}
