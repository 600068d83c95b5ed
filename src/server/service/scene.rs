use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::scene::{OrbitalParamsBatchDto, SyncResultDto},
    server::{
        data::satellite::SatelliteRepository,
        error::Error,
        util::{tle::orbital_params, validate::unique_ids},
    },
};

pub struct SceneService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SceneService<'a> {
    /// Creates a new instance of [`SceneService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Derives orbital parameters for each requested satellite that exists.
    ///
    /// Unknown IDs are dropped from the result rather than reported.
    pub async fn orbital_params(
        &self,
        satellite_ids: Vec<i32>,
    ) -> Result<OrbitalParamsBatchDto, Error> {
        let satellites = SatelliteRepository::new(self.db)
            .find_many_by_ids(&unique_ids(&satellite_ids))
            .await?;

        let params: BTreeMap<i32, _> = satellites
            .iter()
            .map(|satellite| {
                (
                    satellite.id,
                    orbital_params(&satellite.line1, &satellite.line2),
                )
            })
            .collect();

        Ok(OrbitalParamsBatchDto(params))
    }

    /// Element set synchronisation entry point, there is no upstream source so nothing is
    /// ever updated.
    pub async fn sync_tle(&self) -> Result<SyncResultDto, Error> {
        Ok(SyncResultDto { updated_count: 0 })
    }
}
