//! # Bank Server
//!
//! Main entry point. Runs the public-info or the account service, selected
//! with `BANK_SERVICE` (or `app.service` in the configuration files).

use bank_config::{ConfigLoader, ObservabilityConfig};
use bank_server::{app::AppBuilder, startup};
use tokio::signal;
use tracing::{error, info};

const CONFIG_DIR_VAR: &str = "BANK_CONFIG_DIR";

#[tokio::main]
async fn main() {
    let config_dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".to_string());
    let config = match ConfigLoader::from_env(config_dir).and_then(|loader| loader.load()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    startup::print_banner();
    info!("Starting bank server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = AppBuilder::new(config).run(shutdown_signal()).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_directives = if config.tracing_enabled {
        format!("{},tower_http=debug", config.log_level)
    } else {
        config.log_level.clone()
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let (pretty, json) = if config.log_format == "json" {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(true)), None)
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .try_init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
