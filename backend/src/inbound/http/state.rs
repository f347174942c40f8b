//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::PortfolioService;
use crate::domain::ports::{PortfolioCommand, PortfolioQuery, PortfolioRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub portfolio_query: Arc<dyn PortfolioQuery>,
    pub portfolio_command: Arc<dyn PortfolioCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        portfolio_query: Arc<dyn PortfolioQuery>,
        portfolio_command: Arc<dyn PortfolioCommand>,
    ) -> Self {
        Self {
            portfolio_query,
            portfolio_command,
        }
    }

    /// Construct state from a portfolio service over the given repository,
    /// sharing one service instance between both driving ports.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: PortfolioRepository + 'static,
    {
        let service = Arc::new(PortfolioService::new(repo));
        Self {
            portfolio_query: service.clone(),
            portfolio_command: service,
        }
    }
}
