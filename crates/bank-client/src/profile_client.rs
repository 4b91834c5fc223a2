//! Client for `profile-app`.

use crate::http::ServiceEndpoint;
use crate::ServiceDiscovery;
use async_trait::async_trait;
use bank_config::PROFILE_APP;
use bank_core::BankResult;
use bank_service::{ProfileClient, ProfileDto};
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;

/// Reads profiles over HTTP.
#[derive(Clone)]
pub struct HttpProfileClient {
    endpoint: ServiceEndpoint,
}

impl HttpProfileClient {
    pub fn new(client: Client, discovery: Arc<dyn ServiceDiscovery>) -> Self {
        Self {
            endpoint: ServiceEndpoint::new(client, discovery, PROFILE_APP),
        }
    }
}

#[async_trait]
impl ProfileClient for HttpProfileClient {
    async fn read_by_id(&self, id: i64) -> BankResult<ProfileDto> {
        debug!("HTTP ReadProfile: {}", id);
        self.endpoint
            .get_json(&format!("/api/profile/profile/read/{}", id))
            .await
    }
}
