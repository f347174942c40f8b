//! Service entry-point: loads settings, builds the store, and starts the
//! HTTP server.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portfolio_api::inbound::http::health::HealthState;
use portfolio_api::outbound::persistence::{DbPool, PoolConfig};
use portfolio_api::server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::from_settings(&settings);
    match settings.database_url() {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|e| std::io::Error::other(format!("failed to build pool: {e}")))?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; portfolios are stored in memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    info!(bind_addr = config.bind_addr(), "starting server");
    let server = create_server(health_state, config)?;
    server.await
}
