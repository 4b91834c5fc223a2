//! Certificate DTO.

use super::{absent, photo, RequiredFields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Certificate scan; `photo` travels as a base64 string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDto {
    pub id: Option<i64>,

    #[serde(default, with = "photo")]
    #[schema(value_type = Option<String>, format = Byte)]
    pub photo: Option<Vec<u8>>,

    #[validate(range(min = 1, message = "Bank details id must be positive"))]
    pub bank_details_id: Option<i64>,
}

impl RequiredFields for CertificateDto {
    fn missing_fields(&self) -> Vec<&'static str> {
        absent(&[
            ("photo", self.photo.as_ref().is_some_and(|p| !p.is_empty())),
            ("bankDetailsId", self.bank_details_id.is_some()),
        ])
    }
}
