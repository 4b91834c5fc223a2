//! Data Transfer Objects (DTOs).
//!
//! One shape per entity serves create, partial update and response, so
//! every field is optional. JSON names are camelCase to match the sibling
//! services.

mod account_details_dto;
mod bank_details_dto;
mod certificate_dto;
mod license_dto;
pub(crate) mod photo;
mod profile_dto;

pub use account_details_dto::*;
pub use bank_details_dto::*;
pub use certificate_dto::*;
pub use license_dto::*;
pub use profile_dto::*;

/// Reports which fields a create request must carry but does not.
pub trait RequiredFields {
    /// Names (camelCase, as on the wire) of the missing required fields.
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// Collects the wire names of absent values.
pub(crate) fn absent(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}
