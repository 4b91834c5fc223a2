//! Certificate controller.

use crate::{
    controllers::crud,
    extractors::{IdsQuery, ValidatedJson},
    responses::{ApiResult, AppError},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bank_core::ErrorResponse;
use bank_service::{CertificateDto, CrudService};
use std::sync::Arc;

/// Base path of the certificate resource.
pub const BASE_PATH: &str = "/api/public-info/certificate";

type Service = Arc<dyn CrudService<CertificateDto>>;

/// Creates the certificate router, to be nested under [`BASE_PATH`].
pub fn router(service: Service) -> Router {
    Router::new()
        .route("/", get(list_certificates).post(create_certificate))
        .route("/:id", get(get_certificate).put(update_certificate))
        .route("/read/:id", get(get_certificate))
        .with_state(service)
}

/// Get certificate by id.
#[utoipa::path(
    get,
    path = "/api/public-info/certificate/{id}",
    tag = "certificates",
    params(("id" = i64, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Found", body = CertificateDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn get_certificate(State(service): State<Service>, Path(id): Path<String>) -> ApiResult<CertificateDto> {
    crud::find_by_id(service.as_ref(), &id).await
}

/// Get several certificates by id.
#[utoipa::path(
    get,
    path = "/api/public-info/certificate",
    tag = "certificates",
    params(IdsQuery),
    responses(
        (status = 200, description = "All requested entities", body = [CertificateDto]),
        (status = 400, description = "Missing or malformed ids", body = ErrorResponse),
        (status = 404, description = "At least one id is unknown", body = ErrorResponse)
    )
)]
pub async fn list_certificates(
    State(service): State<Service>,
    Query(query): Query<IdsQuery>,
) -> ApiResult<Vec<CertificateDto>> {
    crud::find_all_by_id(service.as_ref(), &query).await
}

/// Create certificate.
#[utoipa::path(
    post,
    path = "/api/public-info/certificate",
    tag = "certificates",
    request_body = CertificateDto,
    responses(
        (status = 201, description = "Created", body = CertificateDto),
        (status = 400, description = "Invalid or incomplete body", body = ErrorResponse)
    )
)]
pub async fn create_certificate(
    State(service): State<Service>,
    ValidatedJson(dto): ValidatedJson<CertificateDto>,
) -> Result<(StatusCode, Json<CertificateDto>), AppError> {
    crud::create(service.as_ref(), dto).await
}

/// Update certificate. Absent fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/public-info/certificate/{id}",
    tag = "certificates",
    params(("id" = i64, Path, description = "Entity id")),
    request_body = CertificateDto,
    responses(
        (status = 200, description = "Updated", body = CertificateDto),
        (status = 400, description = "Malformed id or invalid body", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn update_certificate(
    State(service): State<Service>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<CertificateDto>,
) -> ApiResult<CertificateDto> {
    crud::update(service.as_ref(), &id, dto).await
}
