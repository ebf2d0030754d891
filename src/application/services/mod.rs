//! Mapping services for the application layer.

pub mod district_service;
pub mod election_service;
pub mod party_service;
pub mod province_service;

pub use district_service::DistrictService;
pub use election_service::ElectionService;
pub use party_service::PartyService;
pub use province_service::ProvinceService;
