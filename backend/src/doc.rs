//! OpenAPI document for the portfolio API.
//!
//! Served by Swagger UI at `/docs` in debug builds.

use utoipa::OpenApi;

/// Aggregated OpenAPI description of every exposed endpoint.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::portfolios::list_portfolios,
        crate::inbound::http::portfolios::get_portfolio,
        crate::inbound::http::portfolios::get_portfolio_image,
        crate::inbound::http::portfolios::get_portfolio_resume,
        crate::inbound::http::portfolios::get_portfolio_by_username,
        crate::inbound::http::portfolios::create_portfolio,
        crate::inbound::http::portfolios::update_portfolio,
        crate::inbound::http::portfolios::delete_portfolio,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::portfolios::PortfolioResponse,
        crate::inbound::http::schemas::ErrorSchema,
    )),
    tags(
        (name = "portfolio", description = "Portfolio resource management"),
        (name = "health", description = "Service health probes"),
    )
)]
pub struct ApiDoc;
