//! Portfolio API library modules.
//!
//! The crate follows a ports-and-adapters layout: `domain` holds the
//! transport-agnostic entities, ports, and the portfolio service; `inbound`
//! exposes the HTTP adapter; `outbound` holds the persistence adapters;
//! `server` wires everything into an Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
