//! License mapper.

use super::{merge, EntityMapper};
use crate::dto::LicenseDto;
use bank_core::License;

#[derive(Debug, Clone, Copy, Default)]
pub struct LicenseMapper;

impl EntityMapper<License, LicenseDto> for LicenseMapper {
    fn to_dto(&self, entity: License) -> LicenseDto {
        LicenseDto {
            id: entity.id,
            photo: Some(entity.photo),
            bank_details_id: Some(entity.bank_details_id),
        }
    }

    fn to_entity(&self, dto: LicenseDto) -> License {
        License::new(
            dto.photo.unwrap_or_default(),
            dto.bank_details_id.unwrap_or_default(),
        )
    }

    fn merge_to_entity(&self, dto: LicenseDto, mut entity: License) -> License {
        merge(&mut entity.photo, dto.photo);
        merge(&mut entity.bank_details_id, dto.bank_details_id);
        entity
    }
}
