//! Account links service implementation.

use crate::account_links_service::AccountLinksService;
use crate::crud_service::CrudService;
use crate::dto::{AccountDetailsDto, BankDetailsDto, ProfileDto};
use crate::remote::{BankDetailsClient, ProfileClient};
use async_trait::async_trait;
use bank_core::{BankError, BankResult};
use std::sync::Arc;
use tracing::debug;

/// Loads the account locally, then asks the (cached) remote clients.
pub struct AccountLinksServiceImpl {
    accounts: Arc<dyn CrudService<AccountDetailsDto>>,
    profiles: Arc<dyn ProfileClient>,
    bank_details: Arc<dyn BankDetailsClient>,
}

impl AccountLinksServiceImpl {
    pub fn new(
        accounts: Arc<dyn CrudService<AccountDetailsDto>>,
        profiles: Arc<dyn ProfileClient>,
        bank_details: Arc<dyn BankDetailsClient>,
    ) -> Self {
        Self {
            accounts,
            profiles,
            bank_details,
        }
    }
}

fn reference(value: Option<i64>, field: &str, account_id: i64) -> BankResult<i64> {
    value.ok_or_else(|| BankError::internal(format!("Account {} has no {}", account_id, field)))
}

#[async_trait]
impl AccountLinksService for AccountLinksServiceImpl {
    async fn profile_of(&self, account_id: i64) -> BankResult<ProfileDto> {
        let account = self.accounts.find_by_id(account_id).await?;
        let profile_id = reference(account.profile_id, "profileId", account_id)?;
        debug!("Resolving profile {} for account {}", profile_id, account_id);

        self.profiles.read_by_id(profile_id).await
    }

    async fn bank_details_of(&self, account_id: i64) -> BankResult<BankDetailsDto> {
        let account = self.accounts.find_by_id(account_id).await?;
        let bank_details_id = reference(account.bank_details_id, "bankDetailsId", account_id)?;
        debug!("Resolving bank details {} for account {}", bank_details_id, account_id);

        self.bank_details.read_by_id(bank_details_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud_service::MockCrudService;
    use crate::remote::{MockBankDetailsClient, MockProfileClient};
    use mockall::predicate::eq;

    fn account(id: i64) -> AccountDetailsDto {
        AccountDetailsDto {
            id: Some(id),
            bank_details_id: Some(20),
            profile_id: Some(30),
            ..AccountDetailsDto::default()
        }
    }

    #[tokio::test]
    async fn test_profile_of_follows_profile_id() {
        let mut accounts = MockCrudService::<AccountDetailsDto>::new();
        accounts
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(account(id)));

        let mut profiles = MockProfileClient::new();
        profiles.expect_read_by_id().with(eq(30)).times(1).returning(|id| {
            Ok(ProfileDto {
                id: Some(id),
                email: Some("ivanov@example.ru".to_string()),
                ..ProfileDto::default()
            })
        });

        let service = AccountLinksServiceImpl::new(
            Arc::new(accounts),
            Arc::new(profiles),
            Arc::new(MockBankDetailsClient::new()),
        );

        let profile = service.profile_of(1).await.unwrap();
        assert_eq!(profile.id, Some(30));
    }

    #[tokio::test]
    async fn test_bank_details_of_follows_bank_details_id() {
        let mut accounts = MockCrudService::<AccountDetailsDto>::new();
        accounts.expect_find_by_id().returning(|id| Ok(account(id)));

        let mut bank_details = MockBankDetailsClient::new();
        bank_details
            .expect_read_by_id()
            .with(eq(20))
            .returning(|id| Ok(BankDetailsDto { id: Some(id), ..BankDetailsDto::default() }));

        let service = AccountLinksServiceImpl::new(
            Arc::new(accounts),
            Arc::new(MockProfileClient::new()),
            Arc::new(bank_details),
        );

        assert_eq!(service.bank_details_of(2).await.unwrap().id, Some(20));
    }

    #[tokio::test]
    async fn test_missing_account_skips_remote_call() {
        let mut accounts = MockCrudService::<AccountDetailsDto>::new();
        accounts
            .expect_find_by_id()
            .returning(|id| Err(BankError::not_found(format!("Деталей аккаунта не найдено с id {}", id))));

        let mut profiles = MockProfileClient::new();
        profiles.expect_read_by_id().never();

        let service = AccountLinksServiceImpl::new(
            Arc::new(accounts),
            Arc::new(profiles),
            Arc::new(MockBankDetailsClient::new()),
        );

        let err = service.profile_of(9).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let mut accounts = MockCrudService::<AccountDetailsDto>::new();
        accounts.expect_find_by_id().returning(|id| Ok(account(id)));

        let mut profiles = MockProfileClient::new();
        profiles
            .expect_read_by_id()
            .returning(|_| Err(BankError::remote_unavailable("profile-app", "HTTP 503")));

        let service = AccountLinksServiceImpl::new(
            Arc::new(accounts),
            Arc::new(profiles),
            Arc::new(MockBankDetailsClient::new()),
        );

        let err = service.profile_of(1).await.unwrap_err();
        assert_eq!(err.status_code(), 502);
    }
}
