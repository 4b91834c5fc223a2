//! Bank details DTO.

use super::{absent, RequiredFields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Bank registration details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankDetailsDto {
    /// Assigned by the store; ignored on create and update.
    pub id: Option<i64>,

    #[validate(range(min = 1, max = 999_999_999, message = "BIK has at most 9 digits"))]
    pub bik: Option<i64>,

    #[validate(range(min = 1_i64, max = 999_999_999_999_i64, message = "INN has at most 12 digits"))]
    pub inn: Option<i64>,

    #[validate(range(min = 1, max = 999_999_999, message = "KPP has at most 9 digits"))]
    pub kpp: Option<i64>,

    #[validate(range(min = 1, message = "Correspondent account must be positive"))]
    pub cor_account: Option<i64>,

    #[validate(length(min = 1, max = 180, message = "City must be 1-180 characters"))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 15, message = "Company form must be 1-15 characters"))]
    pub joint_stock_company: Option<String>,

    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub name: Option<String>,
}

impl RequiredFields for BankDetailsDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("bik", self.bik.is_some()),
            ("inn", self.inn.is_some()),
            ("kpp", self.kpp.is_some()),
            ("corAccount", self.cor_account.is_some()),
            ("city", self.city.is_some()),
            ("jointStockCompany", self.joint_stock_company.is_some()),
            ("name", self.name.is_some()),
        ])
    }
}
