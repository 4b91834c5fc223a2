//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator, ServiceKind};
use bank_core::{BankError, BankResult};
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable selecting the environment overlay.
pub const ENVIRONMENT_VAR: &str = "BANK_ENVIRONMENT";

/// Environment variable selecting the service to run.
pub const SERVICE_VAR: &str = "BANK_SERVICE";

/// Loads and validates [`AppConfig`].
///
/// Sources, later ones winning:
/// 1. `{dir}/default.toml`
/// 2. `{dir}/{environment}.toml`
/// 3. `{dir}/{service}.toml`
/// 4. `{dir}/local.toml` (not committed to version control)
/// 5. Environment variables with the `BANK_` prefix and `__` separator,
///    e.g. `BANK_DATABASE__URL`
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: String,
    service: ServiceKind,
}

impl ConfigLoader {
    /// Creates a loader for an explicit environment and service.
    pub fn new(config_dir: impl Into<PathBuf>, environment: impl Into<String>, service: ServiceKind) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: environment.into(),
            service,
        }
    }

    /// Creates a loader from `BANK_ENVIRONMENT` and `BANK_SERVICE`, reading `.env` first.
    pub fn from_env(config_dir: impl Into<PathBuf>) -> BankResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        let service = match std::env::var(SERVICE_VAR) {
            Ok(value) => value.parse::<ServiceKind>().map_err(BankError::Configuration)?,
            Err(_) => ServiceKind::default(),
        };

        Ok(Self::new(config_dir, environment, service))
    }

    /// Returns the service this loader targets.
    #[must_use]
    pub const fn service(&self) -> ServiceKind {
        self.service
    }

    /// Builds, deserializes and validates the configuration.
    pub fn load(&self) -> BankResult<AppConfig> {
        info!(
            "Loading configuration for environment: {}, service: {}",
            self.environment, self.service
        );

        let mut builder = Config::builder();

        let layers = [
            "default".to_string(),
            self.environment.clone(),
            self.service.to_string(),
            "local".to_string(),
        ];
        for layer in &layers {
            let path = self.config_dir.join(format!("{}.toml", layer));
            if path.exists() {
                debug!("Loading config layer from: {}", path.display());
                builder = builder.add_source(File::from(path.as_path()).required(false));
            }
        }

        builder = builder
            .add_source(Environment::with_prefix("BANK").separator("__").try_parsing(true))
            .set_override("app.environment", self.environment.as_str())
            .map_err(config_error_to_bank_error)?
            .set_override("app.service", self.service.to_string())
            .map_err(config_error_to_bank_error)?;

        let app_config: AppConfig = builder
            .build()
            .map_err(config_error_to_bank_error)?
            .try_deserialize()
            .map_err(config_error_to_bank_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            BankError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }

    /// Returns the configuration directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

fn config_error_to_bank_error(err: ConfigError) -> BankError {
    BankError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent"), "test", ServiceKind::PublicInfo);

        let config = loader.load().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.app.service, ServiceKind::PublicInfo);
        assert_eq!(config.app.environment, "test");
    }

    #[test]
    fn test_service_layer_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "default.toml",
            "[server]\nport = 8080\n\n[database]\nurl = \"mysql://bank:bank@db:3306/public_info\"\n",
        );
        write(
            dir.path(),
            "account.toml",
            "[server]\nport = 8083\n\n[database]\nurl = \"mysql://bank:bank@db:3306/account\"\n\n[cache.profile]\nttl_secs = 60\n",
        );

        let config = ConfigLoader::new(dir.path(), "test", ServiceKind::Account).load().unwrap();
        assert_eq!(config.app.service, ServiceKind::Account);
        assert_eq!(config.server.port, 8083);
        assert_eq!(config.database.url, "mysql://bank:bank@db:3306/account");
        assert_eq!(config.cache.profile.ttl_secs, 60);
        assert_eq!(config.cache.profile.max_bytes, 1_048_576);
        assert_eq!(config.cache.bank_details.ttl_secs, 365 * 24 * 60 * 60);
    }

    #[test]
    fn test_invalid_layer_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "default.toml", "[cache.bank_details]\nttl_secs = 0\n");

        let err = ConfigLoader::new(dir.path(), "test", ServiceKind::PublicInfo)
            .load()
            .unwrap_err();
        assert!(matches!(err, BankError::Configuration(ref msg) if msg.contains("cache.bank_details.ttl_secs")));
    }
}
