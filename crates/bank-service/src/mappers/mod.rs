//! Entity-DTO mappers.
//!
//! `to_entity` never carries identity: ids are assigned by the store.
//! `merge_to_entity` copies only the fields present in the DTO, so a
//! partial body leaves the remaining columns untouched.

mod account_details_mapper;
mod bank_details_mapper;
mod certificate_mapper;
mod license_mapper;

pub use account_details_mapper::AccountDetailsMapper;
pub use bank_details_mapper::BankDetailsMapper;
pub use certificate_mapper::CertificateMapper;
pub use license_mapper::LicenseMapper;

/// Bidirectional conversion between an entity and its DTO.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait EntityMapper<E: Send + Sync + 'static, D: Send + Sync + 'static>: Send + Sync {
    /// Copies every entity field, identity included, into a DTO.
    fn to_dto(&self, entity: E) -> D;

    /// Builds an unsaved entity from a DTO. Absent fields take their zero value.
    fn to_entity(&self, dto: D) -> E;

    /// Maps a list element by element, preserving order.
    fn to_dto_list(&self, entities: Vec<E>) -> Vec<D> {
        entities.into_iter().map(|entity| self.to_dto(entity)).collect()
    }

    /// Overwrites `entity` with every present DTO field except the id.
    fn merge_to_entity(&self, dto: D, entity: E) -> E;
}

/// Assigns `value` to `target` when present.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
