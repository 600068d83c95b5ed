use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::satellite::OrbitalParamsDto;

/// Orbital parameters keyed by satellite id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OrbitalParamsBatchDto(pub BTreeMap<i32, OrbitalParamsDto>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncResultDto {
    pub updated_count: u64,
}
