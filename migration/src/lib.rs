pub use sea_orm_migration::prelude::*;

mod m20251020_000001_satellite;
mod m20251020_000002_group;
mod m20251020_000003_satellite_group;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_satellite::Migration),
            Box::new(m20251020_000002_group::Migration),
            Box::new(m20251020_000003_satellite_group::Migration),
        ]
    }
}
