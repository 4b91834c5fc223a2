//! Services handed to the routers.

use bank_core::HealthCheck;
use bank_service::{
    AccountDetailsDto, AccountLinksService, BankDetailsDto, CertificateDto, CrudService,
    LicenseDto,
};
use std::sync::Arc;

/// Services of the public-info deployment.
#[derive(Clone)]
pub struct PublicInfoServices {
    pub bank_details: Arc<dyn CrudService<BankDetailsDto>>,
    pub certificates: Arc<dyn CrudService<CertificateDto>>,
    pub licenses: Arc<dyn CrudService<LicenseDto>>,
}

/// Services of the account deployment.
#[derive(Clone)]
pub struct AccountServices {
    pub details: Arc<dyn CrudService<AccountDetailsDto>>,
    pub links: Arc<dyn AccountLinksService>,
}

/// Which API surface a router serves.
#[derive(Clone)]
pub enum ApiServices {
    PublicInfo(PublicInfoServices),
    Account(AccountServices),
}

/// State of the health endpoints.
#[derive(Clone)]
pub struct HealthState {
    pub service: String,
    pub version: String,
    pub checks: Vec<Arc<dyn HealthCheck>>,
}

impl HealthState {
    /// Creates health state for `service` running `version`.
    pub fn new(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            checks: Vec::new(),
        }
    }

    /// Adds a dependency consulted by the readiness check.
    #[must_use]
    pub fn with_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.checks.push(check);
        self
    }
}
