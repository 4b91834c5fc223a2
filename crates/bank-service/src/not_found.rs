//! Not-found error supplier.
//!
//! Single policy point for missing entities: builds the localized
//! [`BankError::NotFound`] and decides whether a short batch result fails.

use bank_core::{BankError, BankResult};
use tracing::warn;

/// Localized message prefixes; the missing id(s) are appended.
pub mod messages {
    pub const BANK_DETAILS: &str = "Банковских реквизитов не найдено с id ";
    pub const CERTIFICATE: &str = "Сертификата не найдено с id ";
    pub const LICENSE: &str = "Лицензии не найдено с id ";
    pub const ACCOUNT_DETAILS: &str = "Деталей аккаунта не найдено с id ";
}

/// Supplies not-found errors to the CRUD services.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait EntityNotFoundSupplier: Send + Sync {
    /// Error for a single missing id: `message` followed by `id`.
    fn get_exception(&self, message: &str, id: i64) -> BankError;

    /// Fails when some of `requested` are absent from `found`, naming them.
    fn check_for_size_and_logging(&self, message: &str, requested: &[i64], found: &[i64]) -> BankResult<()>;
}

/// Default supplier: logs the missing ids at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNotFoundSupplierImpl;

impl EntityNotFoundSupplier for EntityNotFoundSupplierImpl {
    fn get_exception(&self, message: &str, id: i64) -> BankError {
        BankError::not_found(format!("{}{}", message, id))
    }

    fn check_for_size_and_logging(&self, message: &str, requested: &[i64], found: &[i64]) -> BankResult<()> {
        let missing: Vec<String> = requested
            .iter()
            .filter(|id| !found.contains(*id))
            .map(ToString::to_string)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let message = format!("{}{}", message, missing.join(", "));
        warn!(
            requested = requested.len(),
            found = found.len(),
            "{}",
            message
        );
        Err(BankError::not_found(message))
    }
}
