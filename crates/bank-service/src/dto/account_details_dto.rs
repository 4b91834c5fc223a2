//! Account details DTO.

use super::{absent, RequiredFields};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Customer account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetailsDto {
    pub id: Option<i64>,

    #[validate(range(min = 1, message = "Passport id must be positive"))]
    pub passport_id: Option<i64>,

    #[validate(range(min = 1, message = "Account number must be positive"))]
    pub account_number: Option<i64>,

    #[validate(range(min = 1, message = "Bank details id must be positive"))]
    pub bank_details_id: Option<i64>,

    /// Balance; JSON number.
    #[schema(value_type = Option<f64>)]
    pub money: Option<Decimal>,

    pub negative_balance: Option<bool>,

    #[validate(range(min = 1, message = "Profile id must be positive"))]
    pub profile_id: Option<i64>,
}

impl RequiredFields for AccountDetailsDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("passportId", self.passport_id.is_some()),
            ("accountNumber", self.account_number.is_some()),
            ("bankDetailsId", self.bank_details_id.is_some()),
            ("money", self.money.is_some()),
            ("negativeBalance", self.negative_balance.is_some()),
            ("profileId", self.profile_id.is_some()),
        ])
    }
}
