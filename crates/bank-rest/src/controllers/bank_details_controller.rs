//! Bank details controller.

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
use bank_service::{BankDetailsDto, CrudService};
use std::sync::Arc;

/// Base path of the bank details resource.
pub const BASE_PATH: &str = "/api/public-info/bank/details";

type Service = Arc<dyn CrudService<BankDetailsDto>>;

/// Creates the bank details router, to be nested under [`BASE_PATH`].
pub fn router(service: Service) -> Router {
    Router::new()
        .route("/", get(list_bank_details).post(create_bank_details))
        .route("/:id", get(get_bank_details).put(update_bank_details))
        .route("/read/:id", get(get_bank_details))
        .with_state(service)
}

/// Get bank details by id.
#[utoipa::path(
    get,
    path = "/api/public-info/bank/details/{id}",
    tag = "bank-details",
    params(("id" = i64, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Found", body = BankDetailsDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn get_bank_details(State(service): State<Service>, Path(id): Path<String>) -> ApiResult<BankDetailsDto> {
    crud::find_by_id(service.as_ref(), &id).await
}

/// Get several bank details by id.
#[utoipa::path(
    get,
    path = "/api/public-info/bank/details",
    tag = "bank-details",
    params(IdsQuery),
    responses(
        (status = 200, description = "All requested entities", body = [BankDetailsDto]),
        (status = 400, description = "Missing or malformed ids", body = ErrorResponse),
        (status = 404, description = "At least one id is unknown", body = ErrorResponse)
    )
)]
pub async fn list_bank_details(
    State(service): State<Service>,
    Query(query): Query<IdsQuery>,
) -> ApiResult<Vec<BankDetailsDto>> {
    crud::find_all_by_id(service.as_ref(), &query).await
}

/// Create bank details.
#[utoipa::path(
    post,
    path = "/api/public-info/bank/details",
    tag = "bank-details",
    request_body = BankDetailsDto,
    responses(
        (status = 201, description = "Created", body = BankDetailsDto),
        (status = 400, description = "Invalid or incomplete body", body = ErrorResponse)
    )
)]
pub async fn create_bank_details(
    State(service): State<Service>,
    ValidatedJson(dto): ValidatedJson<BankDetailsDto>,
) -> Result<(StatusCode, Json<BankDetailsDto>), AppError> {
    crud::create(service.as_ref(), dto).await
}

/// Update bank details. Absent fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/public-info/bank/details/{id}",
    tag = "bank-details",
    params(("id" = i64, Path, description = "Entity id")),
    request_body = BankDetailsDto,
    responses(
        (status = 200, description = "Updated", body = BankDetailsDto),
        (status = 400, description = "Malformed id or invalid body", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn update_bank_details(
    State(service): State<Service>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<BankDetailsDto>,
) -> ApiResult<BankDetailsDto> {
    crud::update(service.as_ref(), &id, dto).await
}
