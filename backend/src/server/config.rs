//! HTTP server configuration object.

use crate::outbound::persistence::DbPool;

use super::settings::ServerSettings;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: String,
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: impl Into<String>, allowed_origins: Vec<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            allowed_origins,
            db_pool: None,
        }
    }

    /// Derive a configuration from loaded settings. The store pool is
    /// attached separately because building it is async and fallible.
    #[must_use]
    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::new(settings.bind_addr(), settings.allowed_origins())
    }

    /// Attach a database connection pool for the persistence adapter.
    ///
    /// Without a pool the server serves requests from the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}
