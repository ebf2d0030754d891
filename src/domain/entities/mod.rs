//! Core domain entities representing election reference data.
//!
//! Entities are plain data structures mirroring one database row each,
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Province`] - A top-level administrative division
//! - [`District`] - A district belonging to at most one province
//! - [`Election`] - An election identified by its year
//! - [`Party`] - A party registered for at most one election
//!
//! # Parent References
//!
//! `District` and `Party` carry their parent as `Option<i32>`. The reference
//! is resolved against the parent's repository at save time; a parent id that
//! does not resolve is stored as `None` rather than rejected.

pub mod district;
pub mod election;
pub mod party;
pub mod province;

pub use district::District;
pub use election::Election;
pub use party::Party;
pub use province::Province;
