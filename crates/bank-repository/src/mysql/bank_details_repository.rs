//! MySQL bank details repository implementation.

use super::{inserted_id, require_id, select_by_ids};
use crate::{traits::CrudRepository, DatabasePool};
use async_trait::async_trait;
use bank_core::{BankDetails, BankResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_BANK_DETAILS: &str =
    "SELECT id, bik, inn, kpp, cor_account, city, joint_stock_company, name FROM bank_details";

/// MySQL bank details repository implementation.
#[derive(Clone)]
pub struct MySqlBankDetailsRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlBankDetailsRepository {
    /// Creates a new MySQL bank details repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of bank details.
#[derive(Debug, FromRow)]
struct BankDetailsRow {
    id: i64,
    bik: i64,
    inn: i64,
    kpp: i64,
    cor_account: i64,
    city: String,
    joint_stock_company: String,
    name: String,
}

impl From<BankDetailsRow> for BankDetails {
    fn from(row: BankDetailsRow) -> Self {
        Self {
            id: Some(row.id),
            bik: row.bik,
            inn: row.inn,
            kpp: row.kpp,
            cor_account: row.cor_account,
            city: row.city,
            joint_stock_company: row.joint_stock_company,
            name: row.name,
        }
    }
}

#[async_trait]
impl CrudRepository<BankDetails> for MySqlBankDetailsRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<BankDetails>> {
        debug!("Finding bank details by id: {}", id);

        let row = sqlx::query_as::<_, BankDetailsRow>(&format!("{} WHERE id = ?", SELECT_BANK_DETAILS))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(BankDetails::from))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<BankDetails>> {
        debug!("Finding bank details by ids: {:?}", ids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = select_by_ids(SELECT_BANK_DETAILS, ids)
            .build_query_as::<BankDetailsRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(BankDetails::from).collect())
    }

    async fn save(&self, entity: BankDetails) -> BankResult<BankDetails> {
        debug!("Saving bank details for bik: {}", entity.bik);

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO bank_details (bik, inn, kpp, cor_account, city, joint_stock_company, name)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entity.bik)
        .bind(entity.inn)
        .bind(entity.kpp)
        .bind(entity.cor_account)
        .bind(&entity.city)
        .bind(&entity.joint_stock_company)
        .bind(&entity.name)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, BankDetailsRow>(&format!("{} WHERE id = ?", SELECT_BANK_DETAILS))
            .bind(inserted_id(&result)?)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, entity: BankDetails) -> BankResult<BankDetails> {
        let id = require_id(entity.id, "bank_details")?;
        debug!("Updating bank details: {}", id);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE bank_details
            SET bik = ?, inn = ?, kpp = ?, cor_account = ?, city = ?,
                joint_stock_company = ?, name = ?
            WHERE id = ?
            "#,
        )
        .bind(entity.bik)
        .bind(entity.inn)
        .bind(entity.kpp)
        .bind(entity.cor_account)
        .bind(&entity.city)
        .bind(&entity.joint_stock_company)
        .bind(&entity.name)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, BankDetailsRow>(&format!("{} WHERE id = ?", SELECT_BANK_DETAILS))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }
}
