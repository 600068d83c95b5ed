//! Group service layer.
//!
//! Group CRUD plus membership management. Group names are unique, a taken name is reported
//! as [`GroupError::NameTaken`] whether it is caught by the lookup before writing or by the
//! unique constraint of the store.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::{
        api::PageQuery,
        group::{
            AssociationResultDto, CreateGroupDto, GroupDto, GroupListDto, GroupQuery,
            UpdateGroupDto,
        },
        satellite::SatelliteListDto,
    },
    server::{
        data::{
            group::GroupRepository,
            satellite::{SatelliteFilter, SatelliteRepository},
            satellite_group::SatelliteGroupRepository,
        },
        error::{group::GroupError, Error},
        model::db::GroupModel,
        service::satellite::load_satellite_dtos,
        util::{
            format::group_dto,
            validate::{page_and_size, required, unique_ids},
        },
    },
};

/// Status assigned to groups created without an explicit status.
const DEFAULT_GROUP_STATUS: i32 = 1;

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    /// Creates a new instance of [`GroupService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all groups matching the optional keyword and status, unpaginated.
    pub async fn list(&self, query: GroupQuery) -> Result<GroupListDto, Error> {
        let groups = GroupRepository::new(self.db)
            .find_many(query.keyword.as_deref(), query.status)
            .await?;

        let list = self.with_counts(groups).await?;

        Ok(GroupListDto {
            total: list.len() as u64,
            list,
        })
    }

    /// Gets a group with its satellite count.
    ///
    /// # Returns
    /// - `Ok(GroupDto)` - The group
    /// - `Err(Error::GroupError)` - No group with the provided ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get(&self, group_id: i32) -> Result<GroupDto, Error> {
        let group = self.find(group_id).await?;

        self.single_dto(group).await
    }

    /// Creates a group.
    ///
    /// # Returns
    /// - `Ok(GroupDto)` - The created group, without satellites
    /// - `Err(Error::ValidationError)` - Group name missing or blank
    /// - `Err(Error::GroupError)` - Group name already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, payload: CreateGroupDto) -> Result<GroupDto, Error> {
        let group_name = required(payload.group_name, "groupName")?;

        let group_repo = GroupRepository::new(self.db);

        if group_repo.find_by_name(&group_name).await?.is_some() {
            return Err(GroupError::NameTaken(group_name).into());
        }

        let group = group_repo
            .create(
                group_name.clone(),
                payload.description,
                payload.status.unwrap_or(DEFAULT_GROUP_STATUS),
            )
            .await
            .map_err(|err| name_conflict(err, &group_name))?;

        tracing::debug!(group_id = %group.id, "Created group");

        Ok(group_dto(group, 0))
    }

    /// Replaces name and description of a group, the status only when provided.
    ///
    /// # Returns
    /// - `Ok(GroupDto)` - The updated group
    /// - `Err(Error::ValidationError)` - Group name missing or blank
    /// - `Err(Error::GroupError)` - No group with the provided ID, or the name belongs to
    ///   another group
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, group_id: i32, payload: UpdateGroupDto) -> Result<GroupDto, Error> {
        let group_name = required(payload.group_name, "groupName")?;

        self.find(group_id).await?;

        let group_repo = GroupRepository::new(self.db);

        if let Some(existing) = group_repo.find_by_name(&group_name).await? {
            if existing.id != group_id {
                return Err(GroupError::NameTaken(group_name).into());
            }
        }

        let group = group_repo
            .update(group_id, group_name.clone(), payload.description, payload.status)
            .await
            .map_err(|err| name_conflict(err, &group_name))?
            .ok_or(GroupError::NotFound(group_id))?;

        self.single_dto(group).await
    }

    /// Deletes a group and its association rows, satellites are kept.
    ///
    /// # Returns
    /// - `Ok(())` - Group deleted
    /// - `Err(Error::GroupError)` - No group with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is deleted
    pub async fn delete(&self, group_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        SatelliteGroupRepository::new(&txn)
            .delete_for_group(group_id)
            .await?;
        let result = GroupRepository::new(&txn).delete(group_id).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;

            return Err(GroupError::NotFound(group_id).into());
        }

        txn.commit().await?;

        tracing::debug!(group_id = %group_id, "Deleted group");

        Ok(())
    }

    /// Lists one page of the satellites associated with a group, ordered by satellite ID.
    ///
    /// # Returns
    /// - `Ok(SatelliteListDto)` - The page with the group's total member count
    /// - `Err(Error::ValidationError)` - Page or size below 1
    /// - `Err(Error::GroupError)` - No group with the provided ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list_satellites(
        &self,
        group_id: i32,
        query: PageQuery,
    ) -> Result<SatelliteListDto, Error> {
        let (page, size) = page_and_size(query.page, query.size)?;

        self.find(group_id).await?;

        let filter = SatelliteFilter {
            group_id: Some(group_id),
            ..Default::default()
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

    /// Associates existing satellites with a group.
    ///
    /// Satellite IDs that do not resolve are ignored, satellites already in the group are
    /// left as they are and not counted.
    ///
    /// # Returns
    /// - `Ok(AssociationResultDto)` - Number of newly associated satellites
    /// - `Err(Error::GroupError)` - No group with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing is associated
    pub async fn associate(
        &self,
        group_id: i32,
        satellite_ids: Vec<i32>,
    ) -> Result<AssociationResultDto, Error> {
        let txn = self.db.begin().await?;

        GroupRepository::new(&txn)
            .find_by_id(group_id)
            .await?
            .ok_or(GroupError::NotFound(group_id))?;

        let membership_repo = SatelliteGroupRepository::new(&txn);
        let current: HashSet<i32> = membership_repo
            .member_ids(group_id)
            .await?
            .into_iter()
            .collect();

        let pairs: Vec<(i32, i32)> = SatelliteRepository::new(&txn)
            .find_many_by_ids(&unique_ids(&satellite_ids))
            .await?
            .into_iter()
            .filter(|satellite| !current.contains(&satellite.id))
            .map(|satellite| (satellite.id, group_id))
            .collect();

        membership_repo.insert_many(&pairs).await?;

        txn.commit().await?;

        Ok(AssociationResultDto {
            success: true,
            associated_count: pairs.len() as u64,
        })
    }

    /// Removes satellites from a group.
    ///
    /// # Returns
    /// - `Ok(AssociationResultDto)` - Number of associations actually removed
    /// - `Err(Error::GroupError)` - No group with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn disassociate(
        &self,
        group_id: i32,
        satellite_ids: Vec<i32>,
    ) -> Result<AssociationResultDto, Error> {
        self.find(group_id).await?;

        let removed = SatelliteGroupRepository::new(self.db)
            .remove(group_id, &unique_ids(&satellite_ids))
            .await?;

        Ok(AssociationResultDto {
            success: true,
            associated_count: removed,
        })
    }

    async fn find(&self, group_id: i32) -> Result<GroupModel, Error> {
        GroupRepository::new(self.db)
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| GroupError::NotFound(group_id).into())
    }

    async fn single_dto(&self, group: GroupModel) -> Result<GroupDto, Error> {
        let counts = SatelliteGroupRepository::new(self.db)
            .satellite_counts(&[group.id])
            .await?;
        let count = counts.get(&group.id).copied().unwrap_or(0);

        Ok(group_dto(group, count))
    }

    async fn with_counts(&self, groups: Vec<GroupModel>) -> Result<Vec<GroupDto>, DbErr> {
        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let counts = SatelliteGroupRepository::new(self.db)
            .satellite_counts(&group_ids)
            .await?;

        Ok(groups
            .into_iter()
            .map(|group| {
                let count = counts.get(&group.id).copied().unwrap_or(0);
                group_dto(group, count)
            })
            .collect())
    }
}

/// Reports a unique constraint violation on the group name as a taken name.
fn name_conflict(err: DbErr, group_name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            GroupError::NameTaken(group_name.to_string()).into()
        }
        _ => err.into(),
    }
}
