//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Wire field
//! names are camelCase (`provinceId`, `noOfDistricts`, ...); entity field
//! names stay snake_case internally.

pub mod district;
pub mod election;
pub mod health;
pub mod party;
pub mod province;
