//! Account details entity.

use crate::Entity;
use rust_decimal::Decimal;

/// A customer account held at a bank.
///
/// `profile_id` and `bank_details_id` point into sibling services; they are
/// resolved remotely, never joined locally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountDetails {
    /// Store-generated identifier.
    pub id: Option<i64>,
    /// Passport of the account holder.
    pub passport_id: i64,
    /// Unique account number.
    pub account_number: i64,
    /// Bank details row in the public-info service.
    pub bank_details_id: i64,
    /// Current balance.
    pub money: Decimal,
    /// Whether the balance may go below zero.
    pub negative_balance: bool,
    /// Holder profile in the profile service.
    pub profile_id: i64,
}

impl AccountDetails {
    /// Returns true when the balance is below zero.
    #[must_use]
    pub fn is_overdrawn(&self) -> bool {
        self.money.is_sign_negative() && !self.money.is_zero()
    }
}

impl Entity for AccountDetails {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
