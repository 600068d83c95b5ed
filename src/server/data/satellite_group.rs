use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::GroupModel;

pub struct SatelliteGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SatelliteGroupRepository<'a, C> {
    /// Creates a new instance of [`SatelliteGroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Counts associated satellites for each of the provided groups
    ///
    /// Groups without any satellites are absent from the returned map.
    pub async fn satellite_counts(&self, group_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = entity::prelude::SatelliteGroup::find()
            .select_only()
            .column(entity::satellite_group::Column::GroupId)
            .column_as(entity::satellite_group::Column::SatelliteId.count(), "count")
            .filter(entity::satellite_group::Column::GroupId.is_in(group_ids.iter().copied()))
            .group_by(entity::satellite_group::Column::GroupId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(group_id, count)| (group_id, count.max(0) as u64))
            .collect())
    }

    /// Gets the groups of each provided satellite, ordered by group ID
    pub async fn groups_for_satellites(
        &self,
        satellite_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<GroupModel>>, DbErr> {
        if satellite_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::SatelliteGroup::find()
            .filter(
                entity::satellite_group::Column::SatelliteId.is_in(satellite_ids.iter().copied()),
            )
            .order_by_asc(entity::satellite_group::Column::GroupId)
            .find_also_related(entity::prelude::Group)
            .all(self.db)
            .await?;

        let mut groups: HashMap<i32, Vec<GroupModel>> = HashMap::new();
        for (membership, group) in rows {
            if let Some(group) = group {
                groups.entry(membership.satellite_id).or_default().push(group);
            }
        }

        Ok(groups)
    }

    /// Gets the IDs of satellites associated with a group
    pub async fn member_ids(&self, group_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SatelliteGroup::find()
            .select_only()
            .column(entity::satellite_group::Column::SatelliteId)
            .filter(entity::satellite_group::Column::GroupId.eq(group_id))
            .order_by_asc(entity::satellite_group::Column::SatelliteId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Inserts associations, expects none of the pairs to exist already
    pub async fn insert_many(&self, pairs: &[(i32, i32)]) -> Result<(), DbErr> {
        if pairs.is_empty() {
            return Ok(());
        }

        let memberships = pairs.iter().map(|&(satellite_id, group_id)| {
            entity::satellite_group::ActiveModel {
                satellite_id: sea_orm::ActiveValue::Set(satellite_id),
                group_id: sea_orm::ActiveValue::Set(group_id),
            }
        });

        entity::prelude::SatelliteGroup::insert_many(memberships)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the full group set of a satellite
    pub async fn replace_for_satellite(
        &self,
        satellite_id: i32,
        group_ids: &[i32],
    ) -> Result<(), DbErr> {
        self.delete_for_satellite(satellite_id).await?;

        let pairs: Vec<(i32, i32)> = group_ids
            .iter()
            .map(|&group_id| (satellite_id, group_id))
            .collect();

        self.insert_many(&pairs).await
    }

    /// Removes associations between a group and the provided satellites
    ///
    /// Returns the number of associations removed.
    pub async fn remove(&self, group_id: i32, satellite_ids: &[i32]) -> Result<u64, DbErr> {
        if satellite_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::SatelliteGroup::delete_many()
            .filter(entity::satellite_group::Column::GroupId.eq(group_id))
            .filter(
                entity::satellite_group::Column::SatelliteId.is_in(satellite_ids.iter().copied()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_for_satellite(&self, satellite_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SatelliteGroup::delete_many()
            .filter(entity::satellite_group::Column::SatelliteId.eq(satellite_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_for_group(&self, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SatelliteGroup::delete_many()
            .filter(entity::satellite_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
