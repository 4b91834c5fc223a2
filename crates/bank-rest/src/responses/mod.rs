//! API response types.
//!
//! Success bodies are the bare DTO JSON the sibling services' clients
//! expect; failures are an [`ErrorResponse`].

use bank_core::{BankError, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub BankError);

impl From<BankError> for AppError {
    fn from(err: BankError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_becomes_404() {
        let response =
            AppError(BankError::not_found("Лицензии не найдено с id 5")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body.code, "NOT_FOUND");
        assert_eq!(body.message, "Лицензии не найдено с id 5");
    }

    #[tokio::test]
    async fn test_remote_unavailable_becomes_502() {
        let response =
            AppError(BankError::remote_unavailable("profile-app", "HTTP 503")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_of(response).await.code, "REMOTE_UNAVAILABLE");
    }

    #[test]
    fn test_created_sets_status() {
        let (status, Json(body)) = created(7_i64);
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, 7);
    }
}
