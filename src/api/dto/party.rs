//! DTOs for party endpoints.

use serde::{Deserialize, Serialize};

/// Wire shape of a party, used for both requests and responses.
///
/// `election_id` mirrors the district/province relationship: optional on the
/// way in, `null` on the way out when the reference did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDto {
    pub party_id: i32,
    pub party_name: String,
    pub election_id: Option<i32>,
}
