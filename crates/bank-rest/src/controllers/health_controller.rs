//! Health check controller.

use crate::state::HealthState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use bank_core::HealthStatus;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service this process runs.
    pub service: String,
    /// Application version.
    pub version: String,
}

/// Outcome of one readiness dependency.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Readiness check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub components: Vec<ComponentHealth>,
}

/// Creates the health router.
pub fn router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
        .with_state(state)
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service,
        version: state.version,
    })
}

/// Readiness check endpoint. Runs every registered dependency check.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "A dependency is unhealthy", body = ReadinessResponse)
    )
)]
pub async fn readiness_check(State(state): State<HealthState>) -> impl IntoResponse {
    let mut components = Vec::with_capacity(state.checks.len());
    let mut ready = true;

    for check in &state.checks {
        let (status, message) = match check.check().await {
            HealthStatus::Healthy => ("healthy", None),
            HealthStatus::Degraded(msg) => ("degraded", Some(msg)),
            HealthStatus::Unhealthy(msg) => {
                ready = false;
                ("unhealthy", Some(msg))
            }
        };
        components.push(ComponentHealth {
            name: check.name().to_string(),
            status: status.to_string(),
            message,
        });
    }

    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(ReadinessResponse { ready, components }))
}

/// Liveness check endpoint.
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use bank_core::HealthCheck;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedCheck(HealthStatus);

    #[async_trait]
    impl HealthCheck for FixedCheck {
        fn name(&self) -> &str {
            "database"
        }

        async fn check(&self) -> HealthStatus {
            self.0.clone()
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn test_health_names_service() {
        let (status, body) = get(router(HealthState::new("account", "0.1.0")), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "account");
    }

    #[tokio::test]
    async fn test_ready_when_checks_pass() {
        let state = HealthState::new("public-info", "0.1.0")
            .with_check(Arc::new(FixedCheck(HealthStatus::Healthy)));
        let (status, body) = get(router(state), "/ready").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ready"], true);
        assert_eq!(body["components"][0]["name"], "database");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_is_down() {
        let state = HealthState::new("public-info", "0.1.0").with_check(Arc::new(FixedCheck(
            HealthStatus::Unhealthy("connection refused".to_string()),
        )));
        let (status, body) = get(router(state), "/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["components"][0]["message"], "connection refused");
    }

    #[tokio::test]
    async fn test_live() {
        let (status, _) = get(router(HealthState::new("account", "0.1.0")), "/live").await;
        assert_eq!(status, StatusCode::OK);
    }
}
