//! Account details controller.
//!
//! Besides the CRUD surface, an account resolves the profile and the bank
//! details it references through the account links service.

use crate::{
    controllers::crud,
    extractors::{parse_id, IdsQuery, ValidatedJson},
    responses::{ok, ApiResult, AppError},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use bank_core::ErrorResponse;
use bank_service::{AccountDetailsDto, AccountLinksService, BankDetailsDto, CrudService, ProfileDto};
use std::sync::Arc;

/// Base path of the account details resource.
pub const BASE_PATH: &str = "/api/account/details";

type Service = Arc<dyn CrudService<AccountDetailsDto>>;

/// Creates the account details router, to be nested under [`BASE_PATH`].
pub fn router(service: Service, links: Arc<dyn AccountLinksService>) -> Router {
    let links_router = Router::new()
        .route("/:id/profile", get(get_account_profile))
        .route("/:id/bank-details", get(get_account_bank_details))
        .with_state(links);

    Router::new()
        .route("/", get(list_account_details).post(create_account_details))
        .route("/:id", get(get_account_details).put(update_account_details))
        .route("/read/:id", get(get_account_details))
        .with_state(service)
        .merge(links_router)
}

/// Get account details by id.
#[utoipa::path(
    get,
    path = "/api/account/details/{id}",
    tag = "account-details",
    params(("id" = i64, Path, description = "Entity id")),
    responses(
        (status = 200, description = "Found", body = AccountDetailsDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn get_account_details(State(service): State<Service>, Path(id): Path<String>) -> ApiResult<AccountDetailsDto> {
    crud::find_by_id(service.as_ref(), &id).await
}

/// Get several account details by id.
#[utoipa::path(
    get,
    path = "/api/account/details",
    tag = "account-details",
    params(IdsQuery),
    responses(
        (status = 200, description = "All requested entities", body = [AccountDetailsDto]),
        (status = 400, description = "Missing or malformed ids", body = ErrorResponse),
        (status = 404, description = "At least one id is unknown", body = ErrorResponse)
    )
)]
pub async fn list_account_details(
    State(service): State<Service>,
    Query(query): Query<IdsQuery>,
) -> ApiResult<Vec<AccountDetailsDto>> {
    crud::find_all_by_id(service.as_ref(), &query).await
}

/// Create account details.
#[utoipa::path(
    post,
    path = "/api/account/details",
    tag = "account-details",
    request_body = AccountDetailsDto,
    responses(
        (status = 201, description = "Created", body = AccountDetailsDto),
        (status = 400, description = "Invalid or incomplete body", body = ErrorResponse)
    )
)]
pub async fn create_account_details(
    State(service): State<Service>,
    ValidatedJson(dto): ValidatedJson<AccountDetailsDto>,
) -> Result<(StatusCode, Json<AccountDetailsDto>), AppError> {
    crud::create(service.as_ref(), dto).await
}

/// Update account details. Absent fields keep their stored values.
#[utoipa::path(
    put,
    path = "/api/account/details/{id}",
    tag = "account-details",
    params(("id" = i64, Path, description = "Entity id")),
    request_body = AccountDetailsDto,
    responses(
        (status = 200, description = "Updated", body = AccountDetailsDto),
        (status = 400, description = "Malformed id or invalid body", body = ErrorResponse),
        (status = 404, description = "No entity with this id", body = ErrorResponse)
    )
)]
pub async fn update_account_details(
    State(service): State<Service>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<AccountDetailsDto>,
) -> ApiResult<AccountDetailsDto> {
    crud::update(service.as_ref(), &id, dto).await
}

/// Profile of the account holder, read from `profile-app`.
#[utoipa::path(
    get,
    path = "/api/account/details/{id}/profile",
    tag = "account-details",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Profile of the holder", body = ProfileDto),
        (status = 404, description = "No account with this id", body = ErrorResponse),
        (status = 502, description = "profile-app unavailable", body = ErrorResponse)
    )
)]
pub async fn get_account_profile(
    State(links): State<Arc<dyn AccountLinksService>>,
    Path(id): Path<String>,
) -> ApiResult<ProfileDto> {
    let id = parse_id(&id)?;
    ok(links.profile_of(id).await?)
}

/// Bank details of the bank holding the account, read from `public-info-app`.
#[utoipa::path(
    get,
    path = "/api/account/details/{id}/bank-details",
    tag = "account-details",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Bank details", body = BankDetailsDto),
        (status = 404, description = "No account with this id", body = ErrorResponse),
        (status = 502, description = "public-info-app unavailable", body = ErrorResponse)
    )
)]
pub async fn get_account_bank_details(
    State(links): State<Arc<dyn AccountLinksService>>,
    Path(id): Path<String>,
) -> ApiResult<BankDetailsDto> {
    let id = parse_id(&id)?;
    ok(links.bank_details_of(id).await?)
}
