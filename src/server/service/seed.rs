//! Default catalogue data for fresh installations.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        group::GroupRepository, satellite::SatelliteRepository,
        satellite_group::SatelliteGroupRepository,
    },
    error::Error,
};

/// Name of the group the default satellites are placed in.
pub const DEFAULT_GROUP_NAME: &str = "Default";

/// Groups created when the store has none: (name, description).
pub const DEFAULT_GROUPS: [(&str, &str); 3] = [
    (DEFAULT_GROUP_NAME, "System default group"),
    ("Communication", "Satellites used for communication"),
    ("Observation", "Satellites used for Earth observation"),
];

/// Satellites created when the store has none: (name, line1, line2).
pub const DEFAULT_SATELLITES: [(&str, &str, &str); 2] = [
    (
        "ISS (ZARYA)",
        "1 25544U 98067A   23048.54974424  .00016717  00000-0  10270-3 0  9002",
        "2 25544  51.6445 271.3223 0004195  86.0789 274.1359 15.50077880391451",
    ),
    (
        "TIANGONG-2",
        "1 41787U 16057A   23048.00556250  .00000074  00000+0  10568-4 0  9997",
        "2 41787  42.7753  96.0725 0003289  59.5299  15.7359 15.58877324118847",
    ),
];

/// Number of records created by a seeding run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub groups: u64,
    pub satellites: u64,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Seeds the default groups and satellites into empty tables.
    ///
    /// Each table is only seeded when it holds no rows, running this against a populated
    /// store creates nothing. Seeded satellites are placed in the [`DEFAULT_GROUP_NAME`]
    /// group when it exists.
    pub async fn seed_defaults(&self) -> Result<SeedSummary, Error> {
        let txn = self.db.begin().await?;

        let group_repo = GroupRepository::new(&txn);
        let satellite_repo = SatelliteRepository::new(&txn);
        let mut summary = SeedSummary::default();

        if group_repo.count().await? == 0 {
            for (group_name, description) in DEFAULT_GROUPS {
                group_repo
                    .create(group_name.to_string(), Some(description.to_string()), 1)
                    .await?;
                summary.groups += 1;
            }
        }

        if satellite_repo.count().await? == 0 {
            let mut satellite_ids = Vec::new();
            for (name, line1, line2) in DEFAULT_SATELLITES {
                let satellite = satellite_repo
                    .create(name.to_string(), line1.to_string(), line2.to_string())
                    .await?;
                satellite_ids.push(satellite.id);
                summary.satellites += 1;
            }

            if let Some(default_group) = group_repo.find_by_name(DEFAULT_GROUP_NAME).await? {
                let pairs: Vec<(i32, i32)> = satellite_ids
                    .into_iter()
                    .map(|satellite_id| (satellite_id, default_group.id))
                    .collect();

                SatelliteGroupRepository::new(&txn)
                    .insert_many(&pairs)
                    .await?;
            }
        }

        txn.commit().await?;

        Ok(summary)
    }
}
