//! Generic CRUD service implementation.

use crate::crud_service::CrudService;
use crate::dto::RequiredFields;
use crate::mappers::EntityMapper;
use crate::not_found::EntityNotFoundSupplier;
use async_trait::async_trait;
use bank_core::{BankError, BankResult, Entity, ValidateExt};
use bank_repository::CrudRepository;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

/// CRUD service assembled from a repository, a mapper and a not-found supplier.
///
/// One instance per entity type; `message` is the localized not-found prefix
/// and `entity_name` only labels log lines.
pub struct CrudServiceImpl<E, D> {
    repository: Arc<dyn CrudRepository<E>>,
    mapper: Arc<dyn EntityMapper<E, D>>,
    supplier: Arc<dyn EntityNotFoundSupplier>,
    message: &'static str,
    entity_name: &'static str,
}

impl<E, D> CrudServiceImpl<E, D>
where
    E: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    /// Creates a new CRUD service.
    pub fn new(
        repository: Arc<dyn CrudRepository<E>>,
        mapper: Arc<dyn EntityMapper<E, D>>,
        supplier: Arc<dyn EntityNotFoundSupplier>,
        message: &'static str,
        entity_name: &'static str,
    ) -> Self {
        Self {
            repository,
            mapper,
            supplier,
            message,
            entity_name,
        }
    }

    async fn load(&self, id: i64) -> BankResult<E> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.supplier.get_exception(self.message, id))
    }
}

#[async_trait]
impl<E, D> CrudService<D> for CrudServiceImpl<E, D>
where
    E: Entity + Send + Sync + 'static,
    D: RequiredFields + Validate + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: i64) -> BankResult<D> {
        debug!("Finding {} by id: {}", self.entity_name, id);

        let entity = self.load(id).await?;
        Ok(self.mapper.to_dto(entity))
    }

    async fn find_all_by_id(&self, ids: Vec<i64>) -> BankResult<Vec<D>> {
        let mut seen = HashSet::with_capacity(ids.len());
        let ids: Vec<i64> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        debug!("Finding {} by ids: {:?}", self.entity_name, ids);

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = self.repository.find_all_by_id(&ids).await?;
        if entities.len() < ids.len() {
            let found: Vec<i64> = entities.iter().filter_map(Entity::id).collect();
            self.supplier
                .check_for_size_and_logging(self.message, &ids, &found)?;
        }

        Ok(self.mapper.to_dto_list(entities))
    }

    async fn create(&self, dto: D) -> BankResult<D> {
        debug!("Creating {}", self.entity_name);

        dto.validate_request()?;
        let missing = dto.missing_fields();
        if !missing.is_empty() {
            return Err(BankError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let saved = self.repository.save(self.mapper.to_entity(dto)).await?;
        info!("{} created with id {:?}", self.entity_name, saved.id());

        Ok(self.mapper.to_dto(saved))
    }

    async fn update(&self, id: i64, dto: D) -> BankResult<D> {
        debug!("Updating {}: {}", self.entity_name, id);

        dto.validate_request()?;
        let entity = self.load(id).await?;
        let merged = self.mapper.merge_to_entity(dto, entity);
        let updated = self.repository.update(merged).await?;
        info!("{} {} updated", self.entity_name, id);

        Ok(self.mapper.to_dto(updated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CertificateDto;
    use crate::mappers::MockEntityMapper;
    use crate::not_found::{messages::CERTIFICATE as MESSAGE, MockEntityNotFoundSupplier};
    use bank_core::Certificate;
    use bank_repository::MockCrudRepository;
    use mockall::predicate::eq;
    use mockall::Sequence;

    type Repository = MockCrudRepository<Certificate>;
    type Mapper = MockEntityMapper<Certificate, CertificateDto>;

    fn certificate(id: i64) -> Certificate {
        Certificate {
            id: Some(id),
            photo: vec![1, 2, 3],
            bank_details_id: 1,
        }
    }

    fn certificate_dto(id: Option<i64>) -> CertificateDto {
        CertificateDto {
            id,
            photo: Some(vec![1, 2, 3]),
            bank_details_id: Some(1),
        }
    }

    fn service(
        repository: Repository,
        mapper: Mapper,
        supplier: MockEntityNotFoundSupplier,
    ) -> CrudServiceImpl<Certificate, CertificateDto> {
        CrudServiceImpl::new(
            Arc::new(repository),
            Arc::new(mapper),
            Arc::new(supplier),
            MESSAGE,
            "certificate",
        )
    }

    fn not_found_supplier() -> MockEntityNotFoundSupplier {
        let mut supplier = MockEntityNotFoundSupplier::new();
        supplier
            .expect_get_exception()
            .returning(|message, id| BankError::not_found(format!("{}{}", message, id)));
        supplier
    }

    // =========================================================================
    // find_by_id
    // =========================================================================

    #[tokio::test]
    async fn test_find_by_id_maps_stored_entity() {
        let mut repository = Repository::new();
        repository
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(certificate(id))));

        let mut mapper = Mapper::new();
        mapper
            .expect_to_dto()
            .with(eq(certificate(1)))
            .times(1)
            .returning(|entity| certificate_dto(entity.id));

        let result = service(repository, mapper, MockEntityNotFoundSupplier::new())
            .find_by_id(1)
            .await
            .unwrap();

        assert_eq!(result, certificate_dto(Some(1)));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found_without_mapping() {
        let mut repository = Repository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let mut mapper = Mapper::new();
        mapper.expect_to_dto().never();

        let err = service(repository, mapper, not_found_supplier())
            .find_by_id(7)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("{}7", MESSAGE));
    }

    #[tokio::test]
    async fn test_find_by_id_propagates_persistence_error() {
        let mut repository = Repository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Err(BankError::persistence("connection reset")));

        let err = service(repository, Mapper::new(), MockEntityNotFoundSupplier::new())
            .find_by_id(1)
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
    }

    // =========================================================================
    // find_all_by_id
    // =========================================================================

    #[tokio::test]
    async fn test_find_all_by_id_short_result_runs_batch_check() {
        let mut repository = Repository::new();
        repository
            .expect_find_all_by_id()
            .withf(|ids| ids.to_vec() == vec![1, 2, 3])
            .returning(|_| Ok(vec![certificate(1), certificate(3)]));

        let mut supplier = MockEntityNotFoundSupplier::new();
        supplier
            .expect_check_for_size_and_logging()
            .withf(|message, requested, found| {
                message == MESSAGE && requested.to_vec() == vec![1, 2, 3] && found.to_vec() == vec![1, 3]
            })
            .times(1)
            .returning(|message, _, _| Err(BankError::not_found(format!("{}2", message))));

        let mut mapper = Mapper::new();
        mapper.expect_to_dto_list().never();

        let err = service(repository, mapper, supplier)
            .find_all_by_id(vec![1, 2, 3])
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().ends_with('2'));
    }

    #[tokio::test]
    async fn test_find_all_by_id_complete_result_skips_batch_check() {
        let mut repository = Repository::new();
        repository
            .expect_find_all_by_id()
            .returning(|ids| Ok(ids.iter().map(|id| certificate(*id)).collect()));

        let mut supplier = MockEntityNotFoundSupplier::new();
        supplier.expect_check_for_size_and_logging().never();

        let mut mapper = Mapper::new();
        mapper
            .expect_to_dto_list()
            .times(1)
            .returning(|entities| entities.into_iter().map(|e| certificate_dto(e.id)).collect());

        let result = service(repository, mapper, supplier)
            .find_all_by_id(vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn test_find_all_by_id_collapses_duplicates() {
        let mut repository = Repository::new();
        repository
            .expect_find_all_by_id()
            .withf(|ids| ids.to_vec() == vec![2, 1])
            .times(1)
            .returning(|_| Ok(vec![certificate(1), certificate(2)]));

        let mut mapper = Mapper::new();
        mapper
            .expect_to_dto_list()
            .returning(|entities| entities.into_iter().map(|e| certificate_dto(e.id)).collect());

        let result = service(repository, mapper, MockEntityNotFoundSupplier::new())
            .find_all_by_id(vec![2, 1, 2, 2])
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn test_find_all_by_id_empty_request_skips_store() {
        let mut repository = Repository::new();
        repository.expect_find_all_by_id().never();

        let result = service(repository, Mapper::new(), MockEntityNotFoundSupplier::new())
            .find_all_by_id(Vec::new())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    // =========================================================================
    // create
    // =========================================================================

    #[tokio::test]
    async fn test_create_maps_saves_and_maps_back_in_order() {
        let mut seq = Sequence::new();
        let mut mapper = Mapper::new();
        let mut repository = Repository::new();

        mapper
            .expect_to_entity()
            .with(eq(certificate_dto(None)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|dto| Certificate::new(dto.photo.unwrap_or_default(), 1));
        repository
            .expect_save()
            .withf(|entity| entity.id.is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|entity| Ok(Certificate { id: Some(11), ..entity }));
        mapper
            .expect_to_dto()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|entity| certificate_dto(entity.id));

        let result = service(repository, mapper, MockEntityNotFoundSupplier::new())
            .create(certificate_dto(None))
            .await
            .unwrap();

        assert_eq!(result.id, Some(11));
    }

    #[tokio::test]
    async fn test_create_save_failure_skips_post_save_mapping() {
        let mut mapper = Mapper::new();
        mapper
            .expect_to_entity()
            .returning(|_| Certificate::new(vec![1], 1));
        mapper.expect_to_dto().never();

        let mut repository = Repository::new();
        repository
            .expect_save()
            .returning(|_| Err(BankError::persistence("foreign key violation")));

        let err = service(repository, mapper, MockEntityNotFoundSupplier::new())
            .create(certificate_dto(None))
            .await
            .unwrap_err();

        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_required_fields() {
        let mut repository = Repository::new();
        repository.expect_save().never();

        let dto = CertificateDto {
            bank_details_id: Some(1),
            ..CertificateDto::default()
        };
        let err = service(repository, Mapper::new(), MockEntityNotFoundSupplier::new())
            .create(dto)
            .await
            .unwrap_err();

        assert!(matches!(err, BankError::Validation(ref msg) if msg.contains("photo")));
    }

    // =========================================================================
    // update
    // =========================================================================

    #[tokio::test]
    async fn test_update_loads_merges_saves_and_maps() {
        let mut repository = Repository::new();
        repository
            .expect_find_by_id()
            .with(eq(4))
            .returning(|id| Ok(Some(certificate(id))));
        repository
            .expect_update()
            .withf(|entity| entity.id == Some(4) && entity.bank_details_id == 9)
            .times(1)
            .returning(|entity| Ok(entity));

        let mut mapper = Mapper::new();
        mapper
            .expect_merge_to_entity()
            .times(1)
            .returning(|dto, entity| Certificate {
                bank_details_id: dto.bank_details_id.unwrap_or(entity.bank_details_id),
                ..entity
            });
        mapper
            .expect_to_dto()
            .times(1)
            .returning(|entity| certificate_dto(entity.id));

        let dto = CertificateDto {
            bank_details_id: Some(9),
            ..CertificateDto::default()
        };
        let result = service(repository, mapper, MockEntityNotFoundSupplier::new())
            .update(4, dto)
            .await
            .unwrap();

        assert_eq!(result.id, Some(4));
    }

    #[tokio::test]
    async fn test_update_missing_never_merges_or_saves() {
        let mut repository = Repository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().never();

        let mut mapper = Mapper::new();
        mapper.expect_merge_to_entity().never();

        let err = service(repository, mapper, not_found_supplier())
            .update(5, certificate_dto(None))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("{}5", MESSAGE));
    }
}
