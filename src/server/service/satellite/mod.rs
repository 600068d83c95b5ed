//! Satellite service layer.
//!
//! Coordinates the satellite, group and association repositories to serve the satellite
//! catalogue operations. Mutations touching association rows run inside one transaction.


use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::satellite::{
        CreateSatelliteDto, SatelliteDto, SatelliteListDto, SatelliteQuery, UpdateSatelliteDto,
    },
    server::{
        data::{
            group::GroupRepository,
            satellite::{SatelliteFilter, SatelliteRepository},
            satellite_group::SatelliteGroupRepository,
        },
        error::{satellite::SatelliteError, Error},
        model::db::SatelliteModel,
        util::{
            format::{group_dto, satellite_dto, tle_text},
            validate::{page_and_size, required, unique_ids},
        },
    },
};

pub struct SatelliteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SatelliteService<'a> {
    /// Creates a new instance of [`SatelliteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists one page of satellites with their groups.
    ///
    /// # Arguments
    /// - `query` - Pagination plus optional name keyword, group and status filters
    ///
    /// # Returns
    /// - `Ok(SatelliteListDto)` - The page with the total number of matches before pagination
    /// - `Err(Error::ValidationError)` - Page or size below 1
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list(&self, query: SatelliteQuery) -> Result<SatelliteListDto, Error> {
        let (page, size) = page_and_size(query.page, query.size)?;

        let filter = SatelliteFilter {
            keyword: query.keyword,
            group_id: query.group_id,
            status: query.status,
        };

        let (satellites, total) = SatelliteRepository::new(self.db)
            .find_page(&filter, page, size)
            .await?;
        let list = load_satellite_dtos(self.db, satellites, false).await?;

        Ok(SatelliteListDto {
            total,
            list,
            page,
            size,
        })
    }

    /// Gets the detail view of a satellite, including derived orbital parameters.
    ///
    /// # Returns
    /// - `Ok(SatelliteDto)` - Satellite with groups and `orbital_params`
    /// - `Err(Error::SatelliteError)` - No satellite with the provided ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get(&self, satellite_id: i32) -> Result<SatelliteDto, Error> {
        let satellite = self.find(satellite_id).await?;

        single_dto(self.db, satellite, true).await
    }

    /// Creates a satellite, associating it with the provided groups that exist.
    ///
    /// # Returns
    /// - `Ok(SatelliteDto)` - The created satellite with its groups
    /// - `Err(Error::ValidationError)` - Name or either element set line missing or blank
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is stored
    pub async fn create(&self, payload: CreateSatelliteDto) -> Result<SatelliteDto, Error> {
        let name = required(payload.name, "name")?;
        let line1 = required(payload.line1, "line1")?;
        let line2 = required(payload.line2, "line2")?;

        let txn = self.db.begin().await?;

        let satellite = SatelliteRepository::new(&txn)
            .create(name, line1, line2)
            .await?;

        if let Some(group_ids) = payload.group_ids {
            let group_ids = GroupRepository::new(&txn)
                .find_existing_ids(&unique_ids(&group_ids))
                .await?;
            SatelliteGroupRepository::new(&txn)
                .replace_for_satellite(satellite.id, &group_ids)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(satellite_id = %satellite.id, "Created satellite");

        single_dto(self.db, satellite, false).await
    }

    /// Replaces name and element set of a satellite.
    ///
    /// The status is only changed when provided. When `group_ids` is provided it replaces the
    /// whole association set, IDs of groups that do not exist are ignored.
    ///
    /// # Returns
    /// - `Ok(SatelliteDto)` - The updated satellite with its groups
    /// - `Err(Error::ValidationError)` - Name or either element set line missing or blank
    /// - `Err(Error::SatelliteError)` - No satellite with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is changed
    pub async fn update(
        &self,
        satellite_id: i32,
        payload: UpdateSatelliteDto,
    ) -> Result<SatelliteDto, Error> {
        let name = required(payload.name, "name")?;
        let line1 = required(payload.line1, "line1")?;
        let line2 = required(payload.line2, "line2")?;

        let txn = self.db.begin().await?;

        let satellite = SatelliteRepository::new(&txn)
            .update(satellite_id, name, line1, line2, payload.status)
            .await?
            .ok_or(SatelliteError::NotFound(satellite_id))?;

        if let Some(group_ids) = payload.group_ids {
            let group_ids = GroupRepository::new(&txn)
                .find_existing_ids(&unique_ids(&group_ids))
                .await?;
            SatelliteGroupRepository::new(&txn)
                .replace_for_satellite(satellite.id, &group_ids)
                .await?;
        }

        txn.commit().await?;

        single_dto(self.db, satellite, false).await
    }

    /// Deletes a satellite and its association rows, groups are kept.
    ///
    /// # Returns
    /// - `Ok(())` - Satellite deleted
    /// - `Err(Error::SatelliteError)` - No satellite with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is deleted
    pub async fn delete(&self, satellite_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        SatelliteGroupRepository::new(&txn)
            .delete_for_satellite(satellite_id)
            .await?;
        let result = SatelliteRepository::new(&txn).delete(satellite_id).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;

            return Err(SatelliteError::NotFound(satellite_id).into());
        }

        txn.commit().await?;

        tracing::debug!(satellite_id = %satellite_id, "Deleted satellite");

        Ok(())
    }

    /// Exports a satellite as the three line text `name`, `line1`, `line2`.
    pub async fn export_tle(&self, satellite_id: i32) -> Result<String, Error> {
        let satellite = self.find(satellite_id).await?;

        Ok(tle_text(&satellite))
    }

    async fn find(&self, satellite_id: i32) -> Result<SatelliteModel, Error> {
        SatelliteRepository::new(self.db)
            .find_by_id(satellite_id)
            .await?
            .ok_or_else(|| SatelliteError::NotFound(satellite_id).into())
    }
}

async fn single_dto(
    db: &DatabaseConnection,
    satellite: SatelliteModel,
    include_orbital: bool,
) -> Result<SatelliteDto, Error> {
    let satellite_id = satellite.id;

    load_satellite_dtos(db, vec![satellite], include_orbital)
        .await?
        .pop()
        .ok_or_else(|| SatelliteError::NotFound(satellite_id).into())
}

/// Formats satellites with their groups, each group carrying its satellite count.
///
/// Issues one query for the memberships of all satellites and one for the counts of all
/// groups involved, the order of `satellites` is preserved.
pub(crate) async fn load_satellite_dtos<C: ConnectionTrait>(
    db: &C,
    satellites: Vec<SatelliteModel>,
    include_orbital: bool,
) -> Result<Vec<SatelliteDto>, DbErr> {
    let satellite_ids: Vec<i32> = satellites.iter().map(|s| s.id).collect();

    let membership_repo = SatelliteGroupRepository::new(db);
    let mut groups_by_satellite = membership_repo
        .groups_for_satellites(&satellite_ids)
        .await?;

    let group_ids: Vec<i32> = groups_by_satellite
        .values()
        .flatten()
        .map(|g| g.id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let counts = membership_repo.satellite_counts(&group_ids).await?;

    let dtos = satellites
        .into_iter()
        .map(|satellite| {
            let groups = groups_by_satellite
                .remove(&satellite.id)
                .unwrap_or_default()
                .into_iter()
                .map(|group| {
                    let count = counts.get(&group.id).copied().unwrap_or(0);
                    group_dto(group, count)
                })
                .collect();

            satellite_dto(satellite, groups, include_orbital)
        })
        .collect();

    Ok(dtos)
}
