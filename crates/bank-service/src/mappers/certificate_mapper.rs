//! Certificate mapper.

use super::{merge, EntityMapper};
use crate::dto::CertificateDto;
use bank_core::Certificate;

#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateMapper;

impl EntityMapper<Certificate, CertificateDto> for CertificateMapper {
    fn to_dto(&self, entity: Certificate) -> CertificateDto {
        CertificateDto {
            id: entity.id,
            photo: Some(entity.photo),
            bank_details_id: Some(entity.bank_details_id),
        }
    }

    fn to_entity(&self, dto: CertificateDto) -> Certificate {
        Certificate::new(
            dto.photo.unwrap_or_default(),
            dto.bank_details_id.unwrap_or_default(),
        )
    }

    fn merge_to_entity(&self, dto: CertificateDto, mut entity: Certificate) -> Certificate {
        merge(&mut entity.photo, dto.photo);
        merge(&mut entity.bank_details_id, dto.bank_details_id);
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_photo_when_absent() {
        let stored = Certificate {
            id: Some(5),
            photo: vec![1, 2, 3],
            bank_details_id: 1,
        };
        let dto = CertificateDto {
            bank_details_id: Some(2),
            ..CertificateDto::default()
        };

        let merged = CertificateMapper.merge_to_entity(dto, stored);
        assert_eq!(merged.photo, vec![1, 2, 3]);
        assert_eq!(merged.bank_details_id, 2);
        assert_eq!(merged.id, Some(5));
    }
}
