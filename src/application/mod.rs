//! Application layer services implementing the DTO↔entity mapping.
//!
//! Services orchestrate repository calls and translate between wire-facing
//! DTOs and persisted entities. Each consumes the repository port and
//! provides a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::province_service::ProvinceService`] - Province CRUD plus the single update path
//! - [`services::district_service::DistrictService`] - District CRUD with province resolution
//! - [`services::election_service::ElectionService`] - Election CRUD
//! - [`services::party_service::PartyService`] - Party CRUD with election resolution

pub mod services;
