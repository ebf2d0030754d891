//! District mapping service.

use crate::api::dto::district::DistrictDto;
use crate::domain::entities::{District, Province};
use crate::domain::repositories::Repository;
use crate::error::AppError;
use std::sync::Arc;

fn to_dto(district: District) -> DistrictDto {
    DistrictDto {
        district_id: district.id,
        district_name: district.name,
        province_id: district.province_id,
    }
}

/// Service for district CRUD operations.
///
/// Holds the province repository alongside its own so the parent reference
/// can be resolved before a district is saved.
pub struct DistrictService {
    repository: Arc<dyn Repository<District>>,
    province_repository: Arc<dyn Repository<Province>>,
}

impl DistrictService {
    /// Creates a new district service.
    pub fn new(
        repository: Arc<dyn Repository<District>>,
        province_repository: Arc<dyn Repository<Province>>,
    ) -> Self {
        Self {
            repository,
            province_repository,
        }
    }

    /// Upserts a district from its wire shape and returns the stored shape.
    ///
    /// The province reference is resolved by id first. A `provinceId` that is
    /// missing or does not name an existing province stores the district with
    /// an absent reference; that is the documented silent-degradation branch,
    /// not a failure. The lookup and the save are not transactional.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, dto: DistrictDto) -> Result<DistrictDto, AppError> {
        let province = match dto.province_id {
            Some(province_id) => self.province_repository.find_by_id(province_id).await?,
            None => None,
        };

        let district = District::new(
            dto.district_id,
            dto.district_name,
            province.map(|p| p.id),
        );

        let saved = self.repository.save(district).await?;
        Ok(to_dto(saved))
    }

    /// Lists every district, in persistence-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<DistrictDto>, AppError> {
        let districts = self.repository.find_all().await?;
        Ok(districts.into_iter().map(to_dto).collect())
    }

    /// Retrieves a district by id. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<DistrictDto>, AppError> {
        let district = self.repository.find_by_id(id).await?;
        Ok(district.map(to_dto))
    }

    /// Deletes a district by id. Succeeds whether or not the id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRepository;

    fn dto(id: i32, name: &str, province_id: Option<i32>) -> DistrictDto {
        DistrictDto {
            district_id: id,
            district_name: name.to_string(),
            province_id,
        }
    }

    #[tokio::test]
    async fn test_create_resolves_existing_province() {
        let mut mock_repo = MockRepository::<District>::new();
        let mut mock_province_repo = MockRepository::<Province>::new();

        mock_province_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(Some(Province::new(1, "Western".to_string(), 5))));

        mock_repo
            .expect_save()
            .withf(|d| d.id == 10 && d.province_id == Some(1))
            .times(1)
            .returning(Ok);

        let service = DistrictService::new(Arc::new(mock_repo), Arc::new(mock_province_repo));

        let result = service.create(dto(10, "Colombo", Some(1))).await.unwrap();

        assert_eq!(result, dto(10, "Colombo", Some(1)));
    }

    #[tokio::test]
    async fn test_create_with_unknown_province_stores_absent_reference() {
        let mut mock_repo = MockRepository::<District>::new();
        let mut mock_province_repo = MockRepository::<Province>::new();

        mock_province_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_save()
            .withf(|d| d.province_id.is_none())
            .times(1)
            .returning(Ok);

        let service = DistrictService::new(Arc::new(mock_repo), Arc::new(mock_province_repo));

        let result = service.create(dto(10, "Colombo", Some(42))).await.unwrap();

        assert_eq!(result.province_id, None);
    }

    #[tokio::test]
    async fn test_create_without_province_skips_lookup() {
        let mut mock_repo = MockRepository::<District>::new();
        let mut mock_province_repo = MockRepository::<Province>::new();

        mock_province_repo.expect_find_by_id().times(0);

        mock_repo
            .expect_save()
            .withf(|d| d.province_id.is_none())
            .times(1)
            .returning(Ok);

        let service = DistrictService::new(Arc::new(mock_repo), Arc::new(mock_province_repo));

        let result = service.create(dto(10, "Colombo", None)).await.unwrap();

        assert_eq!(result.province_id, None);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let mut mock_repo = MockRepository::<District>::new();
        let mock_province_repo = MockRepository::<Province>::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = DistrictService::new(Arc::new(mock_repo), Arc::new(mock_province_repo));

        assert!(service.get_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_maps_each_entity() {
        let mut mock_repo = MockRepository::<District>::new();
        let mock_province_repo = MockRepository::<Province>::new();

        mock_repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                District::new(10, "Colombo".to_string(), Some(1)),
                District::new(11, "Gampaha".to_string(), None),
            ])
        });

        let service = DistrictService::new(Arc::new(mock_repo), Arc::new(mock_province_repo));

        let result = service.list_all().await.unwrap();

        assert_eq!(
            result,
            vec![dto(10, "Colombo", Some(1)), dto(11, "Gampaha", None)]
        );
    }

    #[tokio::test]
    async fn test_delete_delegates_to_repository() {
        let mut mock_repo = MockRepository::<District>::new();
        let mock_province_repo = MockRepository::<Province>::new();

        mock_repo
            .expect_delete_by_id()
            .withf(|id| *id == 10)
            .times(1)
            .returning(|_| Ok(()));

        let service = DistrictService::new(Arc::new(mock_repo), Arc::new(mock_province_repo));

        assert!(service.delete_by_id(10).await.is_ok());
    }
}
