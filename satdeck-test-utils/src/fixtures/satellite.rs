use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{ISS_LINE1, ISS_LINE2},
    error::TestError,
    model::SatelliteModel,
    TestContext,
};

impl TestContext {
    pub fn satellite<'a>(&'a self) -> SatelliteFixtures<'a> {
        SatelliteFixtures { setup: self }
    }
}

pub struct SatelliteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> SatelliteFixtures<'a> {
    /// Insert an active satellite carrying the ISS element set under the provided name.
    ///
    /// # Arguments
    /// - `name` - Display name of the satellite
    ///
    /// # Returns
    /// - `Ok(SatelliteModel)` - The inserted satellite record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_satellite(&self, name: &str) -> Result<SatelliteModel, TestError> {
        self.insert_satellite(name, ISS_LINE1, ISS_LINE2, 1).await
    }

    /// Insert a satellite with explicit element set lines and status.
    pub async fn insert_satellite(
        &self,
        name: &str,
        line1: &str,
        line2: &str,
        status: i32,
    ) -> Result<SatelliteModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Satellite::insert(entity::satellite::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                line1: ActiveValue::Set(line1.to_string()),
                line2: ActiveValue::Set(line2.to_string()),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
