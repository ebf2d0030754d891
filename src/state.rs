use std::sync::Arc;

use crate::application::services::{DistrictService, ElectionService, PartyService, ProvinceService};

/// Shared application state injected into all handlers.
///
/// Holds the four entity services, built once at startup. Handlers keep only
/// transient copies of data during a request; no state is cached here between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub province_service: Arc<ProvinceService>,
    pub district_service: Arc<DistrictService>,
    pub election_service: Arc<ElectionService>,
    pub party_service: Arc<PartyService>,
}
