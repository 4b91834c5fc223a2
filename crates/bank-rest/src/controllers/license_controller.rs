//! License controller.

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
use bank_service::{LicenseDto, CrudService};
use std::sync::Arc;

/// Base path of the license resource.
pub const BASE_PATH: &str = "/api/public-info/license";

type Service = Arc<dyn CrudService<LicenseDto>>;

/// Creates the license router, to be nested under [`BASE_PATH`].
pub fn router(service: Service) -> Router {
    Router::new()
        .route("/", get(list_licenses).post(create_license))
        .route("/:id", get(get_license).put(update_license))
        .route("/read/:id", get(get_license))
        .with_state(service)
}

/// Get license by id.
#[utoipa::path(
    get,
    path = "/api/public-info/license/{id}",
    tag = "licenses",
    params(("id" = i64, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Found", body = LicenseDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn get_license(State(service): State<Service>, Path(id): Path<String>) -> ApiResult<LicenseDto> {
    crud::find_by_id(service.as_ref(), &id).await
}

/// Get several licenses by id.
#[utoipa::path(
    get,
    path = "/api/public-info/license",
    tag = "licenses",
    params(IdsQuery),
    responses(
        (status = 200, description = "All requested entities", body = [LicenseDto]),
        (status = 400, description = "Missing or malformed ids", body = ErrorResponse),
        (status = 404, description = "At least one id is unknown", body = ErrorResponse)
    )
)]
pub async fn list_licenses(
    State(service): State<Service>,
    Query(query): Query<IdsQuery>,
) -> ApiResult<Vec<LicenseDto>> {
    crud::find_all_by_id(service.as_ref(), &query).await
}

/// Create license.
#[utoipa::path(
    post,
    path = "/api/public-info/license",
    tag = "licenses",
    request_body = LicenseDto,
    responses(
        (status = 201, description = "Created", body = LicenseDto),
        (status = 400, description = "Invalid or incomplete body", body = ErrorResponse)
    )
)]
pub async fn create_license(
    State(service): State<Service>,
    ValidatedJson(dto): ValidatedJson<LicenseDto>,
) -> Result<(StatusCode, Json<LicenseDto>), AppError> {
    crud::create(service.as_ref(), dto).await
}

/// Update license. Absent fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/public-info/license/{id}",
    tag = "licenses",
    params(("id" = i64, Path, description = "Entity id")),
    request_body = LicenseDto,
    responses(
        (status = 200, description = "Updated", body = LicenseDto),
        (status = 400, description = "Malformed id or invalid body", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn update_license(
    State(service): State<Service>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<LicenseDto>,
) -> ApiResult<LicenseDto> {
    crud::update(service.as_ref(), &id, dto).await
}
