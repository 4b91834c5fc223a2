//! MySQL certificate repository implementation.

use super::{inserted_id, require_id, select_by_ids};
use crate::{traits::CrudRepository, DatabasePool};
use async_trait::async_trait;
use bank_core::{BankResult, Certificate};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_CERTIFICATE: &str = "SELECT id, photo, bank_details_id FROM certificate";

/// MySQL certificate repository implementation.
#[derive(Clone)]
pub struct MySqlCertificateRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlCertificateRepository {
    /// Creates a new MySQL certificate repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> BankResult<Option<CertificateRow>> {
        let row = sqlx::query_as::<_, CertificateRow>(&format!("{} WHERE id = ?", SELECT_CERTIFICATE))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;
        Ok(row)
    }
}

#[derive(Debug, FromRow)]
struct CertificateRow {
    id: i64,
    photo: Vec<u8>,
    bank_details_id: i64,
}

impl From<CertificateRow> for Certificate {
    fn from(row: CertificateRow) -> Self {
        Self {
            id: Some(row.id),
            photo: row.photo,
            bank_details_id: row.bank_details_id,
        }
    }
}

#[async_trait]
impl CrudRepository<Certificate> for MySqlCertificateRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<Certificate>> {
        debug!("Finding certificate by id: {}", id);
        Ok(self.fetch(id).await?.map(Certificate::from))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<Certificate>> {
        debug!("Finding certificates by ids: {:?}", ids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = select_by_ids(SELECT_CERTIFICATE, ids)
            .build_query_as::<CertificateRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Certificate::from).collect())
    }

    async fn save(&self, entity: Certificate) -> BankResult<Certificate> {
        debug!(
            "Saving certificate for bank details {} ({} bytes)",
            entity.bank_details_id,
            entity.photo.len()
        );

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO certificate (photo, bank_details_id) VALUES (?, ?)")
            .bind(&entity.photo)
            .bind(entity.bank_details_id)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, CertificateRow>(&format!("{} WHERE id = ?", SELECT_CERTIFICATE))
            .bind(inserted_id(&result)?)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, entity: Certificate) -> BankResult<Certificate> {
        let id = require_id(entity.id, "certificate")?;
        debug!("Updating certificate: {}", id);

        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE certificate SET photo = ?, bank_details_id = ? WHERE id = ?")
            .bind(&entity.photo)
            .bind(entity.bank_details_id)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, CertificateRow>(&format!("{} WHERE id = ?", SELECT_CERTIFICATE))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }
}
