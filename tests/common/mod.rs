#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use election_registry::application::services::{
    DistrictService, ElectionService, PartyService, ProvinceService,
};
use election_registry::domain::entities::{District, Election, Party, Province};
use election_registry::domain::repositories::Repository;
use election_registry::error::AppError;
use election_registry::state::AppState;

/// Entities that expose their integer key, so one in-memory store serves all
/// four types.
pub trait HasId {
    fn id(&self) -> i32;
}

impl HasId for Province {
    fn id(&self) -> i32 {
        self.id
    }
}

impl HasId for District {
    fn id(&self) -> i32 {
        self.id
    }
}

impl HasId for Election {
    fn id(&self) -> i32 {
        self.id
    }
}

impl HasId for Party {
    fn id(&self) -> i32 {
        self.id
    }
}

/// In-memory `Repository` implementation backing handler tests.
///
/// Behaves like the PostgreSQL implementations at the contract level:
/// `save` upserts, `delete_by_id` is a no-op for missing ids.
pub struct InMemoryRepository<E> {
    records: Mutex<BTreeMap<i32, E>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: HasId + Clone + Send + Sync + 'static,
{
    async fn save(&self, entity: E) -> Result<E, AppError> {
        self.records
            .lock()
            .unwrap()
            .insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<E>, AppError> {
        Ok(self.records.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, AppError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.records.lock().unwrap().remove(&id);
        Ok(())
    }
}

/// Builds an `AppState` wired over in-memory repositories, mirroring the
/// production wiring in `server::run`.
pub fn create_test_state() -> AppState {
    let province_repo = Arc::new(InMemoryRepository::<Province>::new());
    let district_repo = Arc::new(InMemoryRepository::<District>::new());
    let election_repo = Arc::new(InMemoryRepository::<Election>::new());
    let party_repo = Arc::new(InMemoryRepository::<Party>::new());

    AppState {
        province_service: Arc::new(ProvinceService::new(province_repo.clone())),
        district_service: Arc::new(DistrictService::new(district_repo, province_repo)),
        election_service: Arc::new(ElectionService::new(election_repo.clone())),
        party_service: Arc::new(PartyService::new(party_repo, election_repo)),
    }
}
