//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::portfolios::{
    create_portfolio, delete_portfolio, get_portfolio, get_portfolio_by_username,
    get_portfolio_image, get_portfolio_resume, list_portfolios, update_portfolio,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselPortfolioRepository, InMemoryPortfolioRepository};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Uploads are buffered in full before validation, so cap both the
/// in-memory field size and the overall multipart payload.
const MULTIPART_MEMORY_LIMIT: usize = 25 * 1024 * 1024;

/// Build the HTTP handler state based on configuration.
///
/// Uses the database-backed repository when a pool is available, otherwise
/// falls back to the in-memory store for local development and tests.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            HttpState::from_repository(Arc::new(DieselPortfolioRepository::new(pool.clone())))
        }
        None => HttpState::from_repository(Arc::new(InMemoryPortfolioRepository::new())),
    }
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default().allow_any_method().allow_any_header();
    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    allowed_origins: Vec<String>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        allowed_origins,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(
            MultipartFormConfig::default()
                .total_limit(MULTIPART_MEMORY_LIMIT)
                .memory_limit(MULTIPART_MEMORY_LIMIT),
        )
        .wrap(build_cors(&allowed_origins))
        .wrap(Trace)
        .service(list_portfolios)
        .service(get_portfolio_by_username)
        .service(get_portfolio_image)
        .service(get_portfolio_resume)
        .service(get_portfolio)
        .service(create_portfolio)
        .service(update_portfolio)
        .service(delete_portfolio)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// The returned [`Server`] must be awaited to drive the listener. Readiness
/// is marked once the socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        allowed_origins,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            allowed_origins: allowed_origins.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
