//! DTOs for election endpoints.

use serde::{Deserialize, Serialize};

/// Wire shape of an election, used for both requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionDto {
    pub election_id: i32,
    pub election_year: i32,
}
