//! Shared reqwest plumbing.

use crate::ServiceDiscovery;
use bank_config::ClientsConfig;
use bank_core::{BankError, BankResult};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Most of a failed response body that is read and logged.
const MAX_ERROR_BODY_BYTES: usize = 1024;

/// Builds the HTTP client shared by every sibling-service client.
pub fn build_http_client(config: &ClientsConfig) -> BankResult<Client> {
    Client::builder()
        .timeout(config.timeout())
        .connect_timeout(config.connect_timeout())
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .map_err(|e| BankError::internal(format!("Failed to create HTTP client: {}", e)))
}

/// GETs JSON from one logical service.
#[derive(Clone)]
pub(crate) struct ServiceEndpoint {
    client: Client,
    discovery: Arc<dyn ServiceDiscovery>,
    service: &'static str,
}

impl ServiceEndpoint {
    pub(crate) fn new(client: Client, discovery: Arc<dyn ServiceDiscovery>, service: &'static str) -> Self {
        Self {
            client,
            discovery,
            service,
        }
    }

    /// Resolves the base URL now, so a changed table takes effect on the next call.
    pub(crate) fn url(&self, path: &str) -> BankResult<String> {
        Ok(format!("{}{}", self.discovery.resolve(self.service)?, path))
    }

    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> BankResult<T> {
        let url = self.url(path)?;
        debug!("HTTP GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", self.service, e);
            BankError::remote_unavailable(self.service, e.to_string())
        })?;

        handle_response(self.service, response).await
    }
}

async fn handle_response<T: serde::de::DeserializeOwned>(
    service: &str,
    response: reqwest::Response,
) -> BankResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = read_error_body(response).await;
        return Err(map_http_error(service, status, &body));
    }

    response
        .json()
        .await
        .map_err(|e| BankError::remote_unavailable(service, format!("JSON parse error: {}", e)))
}

/// Reads at most [`MAX_ERROR_BODY_BYTES`] of the body, stopping at the first failed chunk.
async fn read_error_body(mut response: reqwest::Response) -> String {
    let mut body = Vec::new();
    while body.len() < MAX_ERROR_BODY_BYTES {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            _ => break,
        }
    }
    body.truncate(MAX_ERROR_BODY_BYTES);
    String::from_utf8_lossy(&body).into_owned()
}

/// The sibling's body is logged only; callers see the status alone.
fn map_http_error(service: &str, status: StatusCode, body: &str) -> BankError {
    warn!("{} answered {}: {}", service, status, body);
    BankError::remote_unavailable(service, format!("HTTP {}", status))
}
