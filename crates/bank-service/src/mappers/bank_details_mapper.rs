//! Bank details mapper.

use super::{merge, EntityMapper};
use crate::dto::BankDetailsDto;
use bank_core::BankDetails;

#[derive(Debug, Clone, Copy, Default)]
pub struct BankDetailsMapper;

impl EntityMapper<BankDetails, BankDetailsDto> for BankDetailsMapper {
    fn to_dto(&self, entity: BankDetails) -> BankDetailsDto {
        BankDetailsDto {
            id: entity.id,
            bik: Some(entity.bik),
            inn: Some(entity.inn),
            kpp: Some(entity.kpp),
            cor_account: Some(entity.cor_account),
            city: Some(entity.city),
            joint_stock_company: Some(entity.joint_stock_company),
            name: Some(entity.name),
        }
    }

    fn to_entity(&self, dto: BankDetailsDto) -> BankDetails {
        BankDetails {
            id: None,
            bik: dto.bik.unwrap_or_default(),
            inn: dto.inn.unwrap_or_default(),
            kpp: dto.kpp.unwrap_or_default(),
            cor_account: dto.cor_account.unwrap_or_default(),
            city: dto.city.unwrap_or_default(),
            joint_stock_company: dto.joint_stock_company.unwrap_or_default(),
            name: dto.name.unwrap_or_default(),
        }
    }

    fn merge_to_entity(&self, dto: BankDetailsDto, mut entity: BankDetails) -> BankDetails {
        merge(&mut entity.bik, dto.bik);
        merge(&mut entity.inn, dto.inn);
        merge(&mut entity.kpp, dto.kpp);
        merge(&mut entity.cor_account, dto.cor_account);
        merge(&mut entity.city, dto.city);
        merge(&mut entity.joint_stock_company, dto.joint_stock_company);
        merge(&mut entity.name, dto.name);
        entity
    }
}
