//! HTTP request handlers for API endpoints.
//!
//! Handlers are pure pass-through: they extract the request, call the
//! matching service operation, and format the response. No validation or
//! branching lives here.

pub mod districts;
pub mod elections;
pub mod health;
pub mod parties;
pub mod provinces;

pub use districts::{
    create_district_handler, delete_district_handler, district_list_handler, get_district_handler,
};
pub use elections::{
    create_election_handler, delete_election_handler, election_list_handler, get_election_handler,
};
pub use health::health_handler;
pub use parties::{
    create_party_handler, delete_party_handler, get_party_handler, party_list_handler,
};
pub use provinces::{
    create_province_handler, delete_province_handler, get_province_handler, province_list_handler,
    update_province_handler,
};
