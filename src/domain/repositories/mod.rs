//! Repository trait definition for the domain layer.
//!
//! A single generic [`Repository`] trait abstracts data access for every
//! entity type, following the Repository pattern. The trait is defined once
//! and instantiated per entity by concrete implementations in
//! `crate::infrastructure::persistence`.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests;
//! integration tests provide an in-memory implementation in `tests/common`.

pub mod repository;

pub use repository::Repository;

#[cfg(test)]
pub use repository::MockRepository;
