//! MySQL account details repository implementation.

use super::{inserted_id, require_id, select_by_ids};
use crate::{traits::CrudRepository, DatabasePool};
use async_trait::async_trait;
use bank_core::{AccountDetails, BankResult};
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

const SELECT_ACCOUNT_DETAILS: &str = r#"
    SELECT id, passport_id, account_number, bank_details_id, money,
           negative_balance, profile_id
    FROM account_details"#;

/// MySQL account details repository implementation.
#[derive(Clone)]
pub struct MySqlAccountDetailsRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlAccountDetailsRepository {
    /// Creates a new MySQL account details repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of account details.
#[derive(Debug, FromRow)]
struct AccountDetailsRow {
    id: i64,
    passport_id: i64,
    account_number: i64,
    bank_details_id: i64,
    money: Decimal,
    negative_balance: bool,
    profile_id: i64,
}

impl From<AccountDetailsRow> for AccountDetails {
    fn from(row: AccountDetailsRow) -> Self {
        Self {
            id: Some(row.id),
            passport_id: row.passport_id,
            account_number: row.account_number,
            bank_details_id: row.bank_details_id,
            money: row.money,
            negative_balance: row.negative_balance,
            profile_id: row.profile_id,
        }
    }
}

#[async_trait]
impl CrudRepository<AccountDetails> for MySqlAccountDetailsRepository {
    async fn find_by_id(&self, id: i64) -> BankResult<Option<AccountDetails>> {
        debug!("Finding account details by id: {}", id);

        let row = sqlx::query_as::<_, AccountDetailsRow>(&format!("{} WHERE id = ?", SELECT_ACCOUNT_DETAILS))
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(row.map(AccountDetails::from))
    }

    async fn find_all_by_id(&self, ids: &[i64]) -> BankResult<Vec<AccountDetails>> {
        debug!("Finding account details by ids: {:?}", ids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = select_by_ids(SELECT_ACCOUNT_DETAILS, ids)
            .build_query_as::<AccountDetailsRow>()
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(AccountDetails::from).collect())
    }

    async fn save(&self, entity: AccountDetails) -> BankResult<AccountDetails> {
        debug!("Saving account details for account number: {}", entity.account_number);

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO account_details
                (passport_id, account_number, bank_details_id, money, negative_balance, profile_id)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entity.passport_id)
        .bind(entity.account_number)
        .bind(entity.bank_details_id)
        .bind(entity.money)
        .bind(entity.negative_balance)
        .bind(entity.profile_id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, AccountDetailsRow>(&format!("{} WHERE id = ?", SELECT_ACCOUNT_DETAILS))
            .bind(inserted_id(&result)?)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn update(&self, entity: AccountDetails) -> BankResult<AccountDetails> {
        let id = require_id(entity.id, "account_details")?;
        debug!("Updating account details: {}", id);

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE account_details
            SET passport_id = ?, account_number = ?, bank_details_id = ?, money = ?,
                negative_balance = ?, profile_id = ?
            WHERE id = ?
            "#,
        )
        .bind(entity.passport_id)
        .bind(entity.account_number)
        .bind(entity.bank_details_id)
        .bind(entity.money)
        .bind(entity.negative_balance)
        .bind(entity.profile_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query_as::<_, AccountDetailsRow>(&format!("{} WHERE id = ?", SELECT_ACCOUNT_DETAILS))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into())
    }
}
