//! Province mapping service.

use crate::api::dto::province::{ProvinceDto, UpdateProvinceRequest};
use crate::domain::entities::Province;
use crate::domain::repositories::Repository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

fn to_dto(province: Province) -> ProvinceDto {
    ProvinceDto {
        province_id: province.id,
        province_name: province.name,
        no_of_districts: province.no_of_districts,
    }
}

fn to_entity(dto: ProvinceDto) -> Province {
    Province::new(dto.province_id, dto.province_name, dto.no_of_districts)
}

/// Service for province CRUD operations.
///
/// Province is the only entity with an update path; the other three expose
/// create/list/get/delete only. That asymmetry is intentional and must not
/// be "completed" here.
pub struct ProvinceService {
    repository: Arc<dyn Repository<Province>>,
}

impl ProvinceService {
    /// Creates a new province service.
    pub fn new(repository: Arc<dyn Repository<Province>>) -> Self {
        Self { repository }
    }

    /// Upserts a province from its wire shape and returns the stored shape.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, dto: ProvinceDto) -> Result<ProvinceDto, AppError> {
        let saved = self.repository.save(to_entity(dto)).await?;
        Ok(to_dto(saved))
    }

    /// Lists every province, in persistence-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<ProvinceDto>, AppError> {
        let provinces = self.repository.find_all().await?;
        Ok(provinces.into_iter().map(to_dto).collect())
    }

    /// Retrieves a province by id. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProvinceDto>, AppError> {
        let province = self.repository.find_by_id(id).await?;
        Ok(province.map(to_dto))
    }

    /// Deletes a province by id. Succeeds whether or not the id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }

    /// Overwrites the name and declared district count of an existing
    /// province, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        id: i32,
        update: UpdateProvinceRequest,
    ) -> Result<ProvinceDto, AppError> {
        let mut province = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Province not found", json!({ "id": id })))?;

        province.name = update.province_name;
        province.no_of_districts = update.no_of_districts;

        let saved = self.repository.save(province).await?;
        Ok(to_dto(saved))
    }
}
