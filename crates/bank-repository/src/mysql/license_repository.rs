//! MySQL license repository implementation.

use super::{inserted_id, require_id, select_by_ids};
use crate::{traits::CrudRepository, DatabasePool};
use async_trait::async_trait;
use bank_core::{BankResult, License};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_LICENSE: &str = "SELECT id, photo, bank_details_id FROM license";

/// MySQL license repository implementation.
#[derive(Clone)]
pub struct MySqlLicenseRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlLicenseRepository {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LicenseRow {
    id: i64,
    photo: Vec<u8>,
    bank_details_id: i64,
}

impl From<LicenseRow> for License {
    fn from(row: LicenseRow) -> Self {
        Self {
            id: Some(row.id),
            photo: row.photo,
            bank_details_id: row.bank_details_id,
        }
    }
}

#[async_trait]
impl CrudRepository<License> for MySqlLicenseRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<License>> {
        debug!("Finding license by id: {}", id);

        let row = sqlx::query_as::<_, LicenseRow>(&format!("{} WHERE id = ?", SELECT_LICENSE))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(License::from))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<License>> {
        debug!("Finding licenses by ids: {:?}", ids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = select_by_ids(SELECT_LICENSE, ids)
            .build_query_as::<LicenseRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(License::from).collect())
    }

    async fn save(&self, entity: License) -> BankResult<License> {
        debug!("Saving license for bank details {}", entity.bank_details_id);

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO license (photo, bank_details_id) VALUES (?, ?)")
            .bind(&entity.photo)
            .bind(entity.bank_details_id)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, LicenseRow>(&format!("{} WHERE id = ?", SELECT_LICENSE))
            .bind(inserted_id(&result)?)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, entity: License) -> BankResult<License> {
        let id = require_id(entity.id, "license")?;
        debug!("Updating license: {}", id);

        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE license SET photo = ?, bank_details_id = ? WHERE id = ?")
            .bind(&entity.photo)
            .bind(entity.bank_details_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, LicenseRow>(&format!("{} WHERE id = ?", SELECT_LICENSE))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }
}
