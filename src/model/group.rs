use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i32,
    pub group_name: String,
    pub description: Option<String>,
    pub status: i32,
    /// Number of satellites associated with the group
    pub satellite_count: u64,
    pub create_at: NaiveDateTime,
    pub update_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct GroupListDto {
    pub total: u64,
    pub list: Vec<GroupDto>,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GroupQuery {
    /// Substring matched against the group name
    pub keyword: Option<String>,
    pub status: Option<i32>,
}

/// Body for creating a group
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupDto {
    /// Required, must not be taken by another group
    pub group_name: Option<String>,
    pub description: Option<String>,
    /// Defaults to 1 (enabled)
    pub status: Option<i32>,
}

/// Body for replacing a group's name and description
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupDto {
    pub group_name: Option<String>,
    pub description: Option<String>,
    /// Left unchanged when absent
    pub status: Option<i32>,
}

/// Result of associating or disassociating satellites with a group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssociationResultDto {
    pub success: bool,
    /// Number of association rows actually added or removed
    pub associated_count: u64,
}
