use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{GroupModel, SatelliteGroupModel},
    TestContext,
};

impl TestContext {
    pub fn group<'a>(&'a self) -> GroupFixtures<'a> {
        GroupFixtures { setup: self }
    }
}

pub struct GroupFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> GroupFixtures<'a> {
    /// Insert an active group without a description.
    pub async fn insert_mock_group(&self, group_name: &str) -> Result<GroupModel, TestError> {
        self.insert_group(group_name, None, 1).await
    }

    /// Insert a group with explicit description and status.
    ///
    /// # Returns
    /// - `Ok(GroupModel)` - The inserted group record
    /// - `Err(TestError::DbErr)` - Insert failed, including a taken group name
    pub async fn insert_group(
        &self,
        group_name: &str,
        description: Option<&str>,
        status: i32,
    ) -> Result<GroupModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Group::insert(entity::group::ActiveModel {
                group_name: ActiveValue::Set(group_name.to_string()),
                description: ActiveValue::Set(description.map(str::to_string)),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Associate a satellite with a group.
    ///
    /// Both records must already exist.
    pub async fn insert_membership(
        &self,
        satellite_id: i32,
        group_id: i32,
    ) -> Result<SatelliteGroupModel, TestError> {
        Ok(
            entity::prelude::SatelliteGroup::insert(entity::satellite_group::ActiveModel {
                satellite_id: ActiveValue::Set(satellite_id),
                group_id: ActiveValue::Set(group_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
