use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::group::GroupDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatelliteDto {
    pub id: i32,
    pub name: String,
    pub line1: String,
    pub line2: String,
    pub status: i32,
    pub groups: Vec<GroupDto>,
    pub create_at: NaiveDateTime,
    pub update_at: NaiveDateTime,
    /// Only present on the detail view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orbital_params: Option<OrbitalParamsDto>,
}

/// Orbital parameters derived from a two-line element set
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalParamsDto {
    /// Semi-major axis in kilometres
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Inclination in degrees
    pub inclination: f64,
    /// Argument of perigee in degrees
    pub argument_of_perigee: f64,
    /// Right ascension of the ascending node in degrees
    pub right_ascension: f64,
    /// Mean anomaly in degrees
    pub mean_anomaly: f64,
    /// Orbital period in minutes
    pub period: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SatelliteListDto {
    /// Number of matches before pagination
    pub total: u64,
    pub list: Vec<SatelliteDto>,
    pub page: u64,
    pub size: u64,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SatelliteQuery {
    /// 1-based page number, defaults to 1
    pub page: Option<u64>,
    /// Items per page, defaults to 20
    pub size: Option<u64>,
    /// Substring matched against the satellite name
    pub keyword: Option<String>,
    /// Only satellites associated with this group
    pub group_id: Option<i32>,
    pub status: Option<i32>,
}

/// Body for creating a satellite
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSatelliteDto {
    pub name: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    /// Groups to join; ids without a matching group are ignored
    pub group_ids: Option<Vec<i32>>,
}

/// Body for replacing a satellite's fields
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSatelliteDto {
    pub name: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    /// Left unchanged when absent
    pub status: Option<i32>,
    /// When present, replaces the satellite's entire group set
    pub group_ids: Option<Vec<i32>>,
}
