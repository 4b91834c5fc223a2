//! Profile DTO owned by `profile-app`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer profile as served by the profile service.
///
/// Read-only here: it is fetched by id, cached, and passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: Option<i64>,
    pub phone_number: Option<i64>,
    pub email: Option<String>,
    pub name_on_card: Option<String>,
    pub inn: Option<i64>,
    pub snils: Option<i64>,
    pub passport_id: Option<i64>,
    pub actual_registration_id: Option<i64>,
}
