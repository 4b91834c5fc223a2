//! Application builder.

use crate::{di, startup};
use axum::Router;
use bank_config::AppConfig;
use bank_core::{BankError, BankResult};
use bank_repository::{create_pool, DatabasePool};
use bank_rest::create_router;
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// Builds the router of the configured service over an existing pool.
pub fn build_router(config: &AppConfig, pool: Arc<DatabasePool>) -> BankResult<Router> {
    let services = di::build_services(config, pool.clone())?;
    let health = di::build_health_state(config, pool);
    Ok(create_router(services, health, &config.server))
}

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Creates a new application builder.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Connects to the database, applies migrations when configured and
    /// serves until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> BankResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let config = self.config;
        info!("Service: {}", config.app.service);
        info!("Environment: {}", config.app.environment);

        let pool = create_pool(&config.database).await?;
        if config.database.run_migrations {
            pool.run_migrations(config.app.service).await?;
        }

        let router = build_router(&config, pool.clone())?;

        let addr = config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| BankError::internal(format!("Failed to bind {}: {}", addr, e)))?;
        startup::print_startup_info(&config);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| BankError::internal(format!("REST server error: {}", e)))?;

        pool.close().await;
        info!("Server shutdown complete");
        Ok(())
    }
}
