//! Election mapping service.

use crate::api::dto::election::ElectionDto;
use crate::domain::entities::Election;
use crate::domain::repositories::Repository;
use crate::error::AppError;
use std::sync::Arc;

fn to_dto(election: Election) -> ElectionDto {
    ElectionDto {
        election_id: election.id,
        election_year: election.year,
    }
}

fn to_entity(dto: ElectionDto) -> Election {
    Election::new(dto.election_id, dto.election_year)
}

/// Service for election CRUD operations.
pub struct ElectionService {
    repository: Arc<dyn Repository<Election>>,
}

impl ElectionService {
    /// Creates a new election service.
    pub fn new(repository: Arc<dyn Repository<Election>>) -> Self {
        Self { repository }
    }

    /// Upserts an election from its wire shape and returns the stored shape.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, dto: ElectionDto) -> Result<ElectionDto, AppError> {
        let saved = self.repository.save(to_entity(dto)).await?;
        Ok(to_dto(saved))
    }

    /// Lists every election, in persistence-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<ElectionDto>, AppError> {
        let elections = self.repository.find_all().await?;
        Ok(elections.into_iter().map(to_dto).collect())
    }

    /// Retrieves an election by id. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ElectionDto>, AppError> {
        let election = self.repository.find_by_id(id).await?;
        Ok(election.map(to_dto))
    }

    /// Deletes an election by id. Succeeds whether or not the id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }
}
