//! Client for `public-info-app`.

use crate::http::ServiceEndpoint;
use crate::ServiceDiscovery;
use async_trait::async_trait;
use bank_config::PUBLIC_INFO_APP;
use bank_core::BankResult;
use bank_service::{BankDetailsClient, BankDetailsDto};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// Reads bank details over HTTP.
#[derive(Clone)]
pub struct HttpBankDetailsClient {
    endpoint: ServiceEndpoint,
}

impl HttpBankDetailsClient {
    pub fn new(client: Client, discovery: Arc<dyn ServiceDiscovery>) -> Self {
        Self {
            endpoint: ServiceEndpoint::new(client, discovery, PUBLIC_INFO_APP),
        }
    }
}

#[async_trait]
impl BankDetailsClient for HttpBankDetailsClient {
    async fn read_by_id(&self, id: i64) -> BankResult<BankDetailsDto> {
        debug!("HTTP ReadBankDetails: {}", id);
        self.endpoint
            .get_json(&format!("/api/public-info/bank/details/{}", id))
            .await
    }
}
