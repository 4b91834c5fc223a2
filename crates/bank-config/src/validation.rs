//! Configuration validation.
//!
//! Every problem is collected before failing, so a broken deployment is
//! reported in one pass instead of one error per restart.

use crate::{AppConfig, CacheRegionConfig};
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or TTL must be positive.
    NonPositiveValue { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// A sibling service this process calls has no base URL.
    MissingServiceUrl { service: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {} (must be 1-65535)", value)
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({}) cannot be greater than max ({})",
                    min, max
                )
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::NonPositiveValue { name } => write!(f, "'{}' must be positive", name),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::MissingServiceUrl { service } => {
                write!(f, "clients.services has no URL for '{}'", service)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort { value: 0 });
        }
        if config.server.request_timeout_secs == 0 {
            errors.push(non_positive("server.request_timeout_secs"));
        }

        Self::validate_database(config, &mut errors);
        Self::validate_cache("cache.profile", &config.cache.profile, &mut errors);
        Self::validate_cache("cache.bank_details", &config.cache.bank_details, &mut errors);
        Self::validate_clients(config, &mut errors);

        let level = config.observability.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let db = &config.database;
        if db.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if !db.url.starts_with("mysql://") {
            errors.push(ConfigValidationError::InvalidUrl {
                url_type: "database".to_string(),
                message: "URL must start with mysql://".to_string(),
            });
        }

        if db.min_connections > db.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: db.min_connections,
                max: db.max_connections,
            });
        }
        if db.connect_timeout_secs == 0 {
            errors.push(non_positive("database.connect_timeout_secs"));
        }
    }

    fn validate_cache(name: &str, region: &CacheRegionConfig, errors: &mut Vec<ConfigValidationError>) {
        if region.ttl_secs == 0 {
            errors.push(non_positive(&format!("{}.ttl_secs", name)));
        }
        if region.max_bytes == 0 {
            errors.push(non_positive(&format!("{}.max_bytes", name)));
        }
    }

    fn validate_clients(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.clients.timeout_secs == 0 {
            errors.push(non_positive("clients.timeout_secs"));
        }

        for service in config.app.service.dependencies() {
            match config.clients.services.get(*service) {
                None => errors.push(ConfigValidationError::MissingServiceUrl {
                    service: (*service).to_string(),
                }),
                Some(url) => {
                    if let Err(e) = Url::parse(url) {
                        errors.push(ConfigValidationError::InvalidUrl {
                            url_type: (*service).to_string(),
                            message: format!("{}: {}", url, e),
                        });
                    }
                }
            }
        }
    }
}

fn non_positive(name: &str) -> ConfigValidationError {
    ConfigValidationError::NonPositiveValue {
        name: name.to_string(),
    }
}
