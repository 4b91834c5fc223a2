//! Main application router.

use crate::{
    controllers::{
        account_details_controller, bank_details_controller, certificate_controller,
        health_controller, license_controller,
    },
    middleware::logging_middleware,
    openapi::{AccountApiDoc, PublicInfoApiDoc},
    state::{AccountServices, ApiServices, HealthState, PublicInfoServices},
};
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use bank_config::ServerConfig;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the application router for the services of one deployment.
pub fn create_router(
    services: ApiServices,
    health: HealthState,
    server_config: &ServerConfig,
) -> Router {
    let (api_router, doc) = match services {
        ApiServices::PublicInfo(services) => {
            (public_info_routes(services), PublicInfoApiDoc::openapi())
        }
        ApiServices::Account(services) => (account_routes(services), AccountApiDoc::openapi()),
    };

    let router = Router::new()
        .merge(health_controller::router(health))
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(server_config.request_timeout_secs)))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Bank details, certificate and license resources.
pub fn public_info_routes(services: PublicInfoServices) -> Router {
    Router::new()
        .nest(
            bank_details_controller::BASE_PATH,
            bank_details_controller::router(services.bank_details),
        )
        .nest(
            certificate_controller::BASE_PATH,
            certificate_controller::router(services.certificates),
        )
        .nest(
            license_controller::BASE_PATH,
            license_controller::router(services.licenses),
        )
}

/// Account details resource with its links.
pub fn account_routes(services: AccountServices) -> Router {
    Router::new().nest(
        account_details_controller::BASE_PATH,
        account_details_controller::router(services.details, services.links),
    )
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }
    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
