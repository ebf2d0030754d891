//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the generic [`crate::domain::repositories::Repository`]
//! trait, one per entity. Queries use the function-style `query_as` API with
//! `FromRow` entities; row columns are aliased to entity field names.
//!
//! # Repositories
//!
//! - [`PgProvinceRepository`] - Province storage
//! - [`PgDistrictRepository`] - District storage
//! - [`PgElectionRepository`] - Election storage
//! - [`PgPartyRepository`] - Party storage

pub mod pg_district_repository;
pub mod pg_election_repository;
pub mod pg_party_repository;
pub mod pg_province_repository;

pub use pg_district_repository::PgDistrictRepository;
pub use pg_election_repository::PgElectionRepository;
pub use pg_party_repository::PgPartyRepository;
pub use pg_province_repository::PgProvinceRepository;
