//! Service discovery: logical service name to base URL.

use bank_config::ClientsConfig;
use bank_core::{BankError, BankResult};
use std::collections::HashMap;

/// Resolves a logical service name (e.g. `profile-app`) to a base URL.
pub trait ServiceDiscovery: Send + Sync {
    fn resolve(&self, service: &str) -> BankResult<String>;
}

/// Fixed name-to-URL table taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticServiceDiscovery {
    services: HashMap<String, String>,
}

impl StaticServiceDiscovery {
    #[must_use]
    pub fn new(services: HashMap<String, String>) -> Self {
        let services = services
            .into_iter()
            .map(|(name, url)| (name, url.trim_end_matches('/').to_string()))
            .collect();
        Self { services }
    }

    #[must_use]
    pub fn from_config(config: &ClientsConfig) -> Self {
        Self::new(config.services.clone())
    }
}

impl ServiceDiscovery for StaticServiceDiscovery {
    fn resolve(&self, service: &str) -> BankResult<String> {
        self.services
            .get(service)
            .cloned()
            .ok_or_else(|| BankError::remote_unavailable(service, "no instance registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_trailing_slash() {
        let discovery = StaticServiceDiscovery::new(HashMap::from([(
            "profile-app".to_string(),
            "http://profile:8081/".to_string(),
        )]));
        assert_eq!(discovery.resolve("profile-app").unwrap(), "http://profile:8081");
    }

    #[test]
    fn test_unknown_service_is_remote_unavailable() {
        let err = StaticServiceDiscovery::default().resolve("public-info-app").unwrap_err();
        assert_eq!(err.error_code(), "REMOTE_UNAVAILABLE");
        assert!(err.to_string().contains("public-info-app"));
    }
}
