use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};

use crate::server::model::db::SatelliteModel;

/// Filters applied when listing satellites.
#[derive(Clone, Debug, Default)]
pub struct SatelliteFilter {
    /// Substring of the satellite name, ignored when empty
    pub keyword: Option<String>,
    /// Only satellites associated with this group
    pub group_id: Option<i32>,
    pub status: Option<i32>,
}

pub struct SatelliteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SatelliteRepository<'a, C> {
    /// Creates a new instance of [`SatelliteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an active satellite
    pub async fn create(
        &self,
        name: String,
        line1: String,
        line2: String,
    ) -> Result<SatelliteModel, DbErr> {
        let now = Utc::now().naive_utc();

        let satellite = entity::satellite::ActiveModel {
            name: ActiveValue::Set(name),
            line1: ActiveValue::Set(line1),
            line2: ActiveValue::Set(line2),
            status: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        satellite.insert(self.db).await
    }

    pub async fn find_by_id(&self, satellite_id: i32) -> Result<Option<SatelliteModel>, DbErr> {
        entity::prelude::Satellite::find_by_id(satellite_id)
            .one(self.db)
            .await
    }

    /// Gets the satellites matching the provided IDs ordered by ID, unknown IDs are skipped
    pub async fn find_many_by_ids(
        &self,
        satellite_ids: &[i32],
    ) -> Result<Vec<SatelliteModel>, DbErr> {
        if satellite_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Satellite::find()
            .filter(entity::satellite::Column::Id.is_in(satellite_ids.iter().copied()))
            .order_by_asc(entity::satellite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets one page of satellites matching the filter, ordered by ID
    ///
    /// # Arguments
    /// - `filter` - Name, group and status filters
    /// - `page` - 1-based page number
    /// - `size` - Number of satellites per page, must be at least 1
    ///
    /// # Returns
    /// - `Ok((satellites, total))` - The requested page and the number of matches before
    ///   pagination
    pub async fn find_page(
        &self,
        filter: &SatelliteFilter,
        page: u64,
        size: u64,
    ) -> Result<(Vec<SatelliteModel>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_asc(entity::satellite::Column::Id)
            .paginate(self.db, size);

        let total = paginator.num_items().await?;
        let satellites = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((satellites, total))
    }

    /// Replaces name and element set lines, and the status when provided
    ///
    /// Returns `Ok(None)` if the satellite does not exist.
    pub async fn update(
        &self,
        satellite_id: i32,
        name: String,
        line1: String,
        line2: String,
        status: Option<i32>,
    ) -> Result<Option<SatelliteModel>, DbErr> {
        let Some(satellite) = self.find_by_id(satellite_id).await? else {
            return Ok(None);
        };

        let mut satellite_am = satellite.into_active_model();
        satellite_am.name = ActiveValue::Set(name);
        satellite_am.line1 = ActiveValue::Set(line1);
        satellite_am.line2 = ActiveValue::Set(line2);
        if let Some(status) = status {
            satellite_am.status = ActiveValue::Set(status);
        }
        satellite_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let satellite = satellite_am.update(self.db).await?;

        Ok(Some(satellite))
    }

    /// Deletes a satellite
    ///
    /// Returns OK regardless of the satellite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, satellite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Satellite::delete_by_id(satellite_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Satellite::find().count(self.db).await
    }

    fn filtered(filter: &SatelliteFilter) -> Select<entity::satellite::Entity> {
        let mut query = entity::prelude::Satellite::find();

        if let Some(keyword) = filter.keyword.as_deref().filter(|k| !k.is_empty()) {
            query = query.filter(entity::satellite::Column::Name.contains(keyword));
        }

        if let Some(group_id) = filter.group_id {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::satellite::Relation::SatelliteGroup.def(),
                )
                .filter(entity::satellite_group::Column::GroupId.eq(group_id));
        }

        if let Some(status) = filter.status {
            query = query.filter(entity::satellite::Column::Status.eq(status));
        }

        query
    }
}
