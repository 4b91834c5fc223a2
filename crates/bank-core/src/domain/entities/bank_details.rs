//! Bank details entity.

use crate::Entity;

/// Registration details of a bank: identification codes and legal name.
///
/// Account records reference this row by `bank_details_id`, and sibling
/// services read it through `/api/public-info/bank/details/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankDetails {
    /// Store-generated identifier.
    pub id: Option<i64>,
    /// Bank identification code (БИК).
    pub bik: i64,
    /// Taxpayer identification number (ИНН).
    pub inn: i64,
    /// Tax registration reason code (КПП).
    pub kpp: i64,
    /// Correspondent account number.
    pub cor_account: i64,
    /// City of registration.
    pub city: String,
    /// Legal form, e.g. `ПАО`.
    pub joint_stock_company: String,
    /// Bank name.
    pub name: String,
}

impl Entity for BankDetails {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
