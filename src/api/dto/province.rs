//! DTOs for province endpoints.

use serde::{Deserialize, Serialize};

/// Wire shape of a province, used for both requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceDto {
    pub province_id: i32,
    pub province_name: String,
    pub no_of_districts: i32,
}

/// Request body for `PUT /api/provinces/{id}`.
///
/// The id comes from the path and is never overwritten.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProvinceRequest {
    pub province_name: String,
    pub no_of_districts: i32,
}
