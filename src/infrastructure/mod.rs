//! Infrastructure layer for external integrations.
//!
//! Implements the repository port defined by the domain layer against
//! PostgreSQL.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
