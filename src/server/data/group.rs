use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::db::GroupModel;

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a group
    ///
    /// Fails with a unique constraint violation if the name is already taken.
    pub async fn create(
        &self,
        group_name: String,
        description: Option<String>,
        status: i32,
    ) -> Result<GroupModel, DbErr> {
        let now = Utc::now().naive_utc();

        let group = entity::group::ActiveModel {
            group_name: ActiveValue::Set(group_name),
            description: ActiveValue::Set(description),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        group.insert(self.db).await
    }

    pub async fn find_by_id(&self, group_id: i32) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::Group::find_by_id(group_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_name(&self, group_name: &str) -> Result<Option<GroupModel>, DbErr> {
        entity::prelude::Group::find()
            .filter(entity::group::Column::GroupName.eq(group_name))
            .one(self.db)
            .await
    }

    /// Gets all groups matching the optional name substring and status, ordered by ID
    pub async fn find_many(
        &self,
        keyword: Option<&str>,
        status: Option<i32>,
    ) -> Result<Vec<GroupModel>, DbErr> {
        let mut query = entity::prelude::Group::find();

        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            query = query.filter(entity::group::Column::GroupName.contains(keyword));
        }

        if let Some(status) = status {
            query = query.filter(entity::group::Column::Status.eq(status));
        }

        query
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns which of the provided IDs belong to existing groups
    pub async fn find_existing_ids(&self, group_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if group_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Group::find()
            .select_only()
            .column(entity::group::Column::Id)
            .filter(entity::group::Column::Id.is_in(group_ids.iter().copied()))
            .order_by_asc(entity::group::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces name and description, and the status when provided
    ///
    /// Returns `Ok(None)` if the group does not exist.
    pub async fn update(
        &self,
        group_id: i32,
        group_name: String,
        description: Option<String>,
        status: Option<i32>,
    ) -> Result<Option<GroupModel>, DbErr> {
        let Some(group) = self.find_by_id(group_id).await? else {
            return Ok(None);
        };

        let mut group_am = group.into_active_model();
        group_am.group_name = ActiveValue::Set(group_name);
        group_am.description = ActiveValue::Set(description);
        if let Some(status) = status {
            group_am.status = ActiveValue::Set(status);
        }
        group_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let group = group_am.update(self.db).await?;

        Ok(Some(group))
    }

    /// Deletes a group
    ///
    /// Returns OK regardless of the group existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, group_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Group::delete_by_id(group_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Group::find().count(self.db).await
    }
}
