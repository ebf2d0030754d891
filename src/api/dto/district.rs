//! DTOs for district endpoints.

use serde::{Deserialize, Serialize};

/// Wire shape of a district, used for both requests and responses.
///
/// `province_id` is optional in both directions: a request may omit it or
/// name a province that does not exist, and the response reflects the
/// resolved reference: `null` when the district is stored without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDto {
    pub district_id: i32,
    pub district_name: String,
    pub province_id: Option<i32>,
}
