//! Account details mapper.

use super::{merge, EntityMapper};
use crate::dto::AccountDetailsDto;
use bank_core::AccountDetails;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDetailsMapper;

impl EntityMapper<AccountDetails, AccountDetailsDto> for AccountDetailsMapper {
    fn to_dto(&self, entity: AccountDetails) -> AccountDetailsDto {
        AccountDetailsDto {
            id: entity.id,
            passport_id: Some(entity.passport_id),
            account_number: Some(entity.account_number),
            bank_details_id: Some(entity.bank_details_id),
            money: Some(entity.money),
            negative_balance: Some(entity.negative_balance),
            profile_id: Some(entity.profile_id),
        }
    }

    fn to_entity(&self, dto: AccountDetailsDto) -> AccountDetails {
        AccountDetails {
            id: None,
            passport_id: dto.passport_id.unwrap_or_default(),
            account_number: dto.account_number.unwrap_or_default(),
            bank_details_id: dto.bank_details_id.unwrap_or_default(),
            money: dto.money.unwrap_or_default(),
            negative_balance: dto.negative_balance.unwrap_or_default(),
            profile_id: dto.profile_id.unwrap_or_default(),
        }
    }

    fn merge_to_entity(&self, dto: AccountDetailsDto, mut entity: AccountDetails) -> AccountDetails {
        merge(&mut entity.passport_id, dto.passport_id);
        merge(&mut entity.account_number, dto.account_number);
        merge(&mut entity.bank_details_id, dto.bank_details_id);
        merge(&mut entity.money, dto.money);
        merge(&mut entity.negative_balance, dto.negative_balance);
        merge(&mut entity.profile_id, dto.profile_id);
        entity
    }
}
