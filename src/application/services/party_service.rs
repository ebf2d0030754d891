//! Party mapping service.

use crate::api::dto::party::PartyDto;
use crate::domain::entities::{Election, Party};
use crate::domain::repositories::Repository;
use crate::error::AppError;
use std::sync::Arc;

fn to_dto(party: Party) -> PartyDto {
    PartyDto {
        party_id: party.id,
        party_name: party.name,
        election_id: party.election_id,
    }
}

/// Service for party CRUD operations.
///
/// Holds the election repository alongside its own so the parent reference
/// can be resolved before a party is saved.
pub struct PartyService {
    repository: Arc<dyn Repository<Party>>,
    election_repository: Arc<dyn Repository<Election>>,
}

impl PartyService {
    /// Creates a new party service.
    pub fn new(
        repository: Arc<dyn Repository<Party>>,
        election_repository: Arc<dyn Repository<Election>>,
    ) -> Self {
        Self {
            repository,
            election_repository,
        }
    }

    /// Upserts a party from its wire shape and returns the stored shape.
    ///
    /// The election reference is resolved by id first; an `electionId` that
    /// is missing or does not name an existing election stores the party with
    /// an absent reference. The lookup and the save are not transactional.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, dto: PartyDto) -> Result<PartyDto, AppError> {
        let election = match dto.election_id {
            Some(election_id) => self.election_repository.find_by_id(election_id).await?,
            None => None,
        };

        let party = Party::new(dto.party_id, dto.party_name, election.map(|e| e.id));

        let saved = self.repository.save(party).await?;
        Ok(to_dto(saved))
    }

    /// Lists every party, in persistence-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<PartyDto>, AppError> {
        let parties = self.repository.find_all().await?;
        Ok(parties.into_iter().map(to_dto).collect())
    }

    /// Retrieves a party by id. Absence is `None`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<PartyDto>, AppError> {
        let party = self.repository.find_by_id(id).await?;
        Ok(party.map(to_dto))
    }

    /// Deletes a party by id. Succeeds whether or not the id existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await
    }
}
