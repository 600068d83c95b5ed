//! Mapping of database models to wire records.

use crate::{
    model::{group::GroupDto, satellite::SatelliteDto},
    server::{
        model::db::{GroupModel, SatelliteModel},
        util::tle::orbital_params,
    },
};

/// Formats a group with the size of its associated-satellite set.
pub fn group_dto(group: GroupModel, satellite_count: u64) -> GroupDto {
    GroupDto {
        id: group.id,
        group_name: group.group_name,
        description: group.description,
        status: group.status,
        satellite_count,
        create_at: group.created_at,
        update_at: group.updated_at,
    }
}

/// Formats a satellite with its already formatted groups.
///
/// Groups are embedded one level deep only. When `include_orbital` is set the detail view's
/// orbital parameter block is derived from the element set.
pub fn satellite_dto(
    satellite: SatelliteModel,
    groups: Vec<GroupDto>,
    include_orbital: bool,
) -> SatelliteDto {
    let orbital_params =
        include_orbital.then(|| orbital_params(&satellite.line1, &satellite.line2));

    SatelliteDto {
        id: satellite.id,
        name: satellite.name,
        line1: satellite.line1,
        line2: satellite.line2,
        status: satellite.status,
        groups,
        create_at: satellite.created_at,
        update_at: satellite.updated_at,
        orbital_params,
    }
}

/// Plain text export of a satellite: name, line 1 and line 2 separated by newlines.
pub fn tle_text(satellite: &SatelliteModel) -> String {
    format!("{}\n{}\n{}", satellite.name, satellite.line1, satellite.line2)
}
