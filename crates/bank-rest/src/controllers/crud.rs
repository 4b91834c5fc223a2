//! Request handling shared by every entity controller.
//!
//! Controllers own the routes and the OpenAPI annotations; the parsing and
//! delegation to [`CrudService`] live here once.

use crate::extractors::{parse_id, IdsQuery};
use crate::responses::{created, ok, ApiResult, AppError};
use axum::{http::StatusCode, Json};
use bank_service::CrudService;
use serde::Serialize;
use tracing::debug;

/// `GET {base}/{id}` and `GET {base}/read/{id}`.
pub async fn find_by_id<D>(service: &dyn CrudService<D>, id: &str) -> ApiResult<D>
where
    D: Serialize + Send + Sync + 'static,
{
    let id = parse_id(id)?;
    ok(service.find_by_id(id).await?)
}

/// `GET {base}?ids=1,2,3`.
pub async fn find_all_by_id<D>(service: &dyn CrudService<D>, query: &IdsQuery) -> ApiResult<Vec<D>>
where
    D: Serialize + Send + Sync + 'static,
{
    let ids = query.parse()?;
    debug!("Batch lookup of {} ids", ids.len());
    ok(service.find_all_by_id(ids).await?)
}

/// `POST {base}`.
pub async fn create<D>(service: &dyn CrudService<D>, dto: D) -> Result<(StatusCode, Json<D>), AppError>
where
    D: Serialize + Send + Sync + 'static,
{
    Ok(created(service.create(dto).await?))
}

/// `PUT {base}/{id}`.
pub async fn update<D>(service: &dyn CrudService<D>, id: &str, dto: D) -> ApiResult<D>
where
    D: Serialize + Send + Sync + 'static,
{
    let id = parse_id(id)?;
    ok(service.update(id, dto).await?)
}
