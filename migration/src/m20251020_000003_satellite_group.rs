use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_satellite::Satellites, m20251020_000002_group::Groups};

static PK_SATELLITE_GROUP: &str = "pk-satellite_groups";
static IDX_SATELLITE_GROUP_GROUP_ID: &str = "idx-satellite_groups-group_id";
static FK_SATELLITE_GROUP_SATELLITE_ID: &str = "fk-satellite_groups-satellite_id";
static FK_SATELLITE_GROUP_GROUP_ID: &str = "fk-satellite_groups-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so SQLite, which cannot ALTER TABLE ADD CONSTRAINT,
        // gets them as well.
        manager
            .create_table(
                Table::create()
                    .table(SatelliteGroups::Table)
                    .if_not_exists()
                    .col(integer(SatelliteGroups::SatelliteId))
                    .col(integer(SatelliteGroups::GroupId))
                    .primary_key(
                        Index::create()
                            .name(PK_SATELLITE_GROUP)
                            .col(SatelliteGroups::SatelliteId)
                            .col(SatelliteGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SATELLITE_GROUP_SATELLITE_ID)
                            .from(SatelliteGroups::Table, SatelliteGroups::SatelliteId)
                            .to(Satellites::Table, Satellites::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SATELLITE_GROUP_GROUP_ID)
                            .from(SatelliteGroups::Table, SatelliteGroups::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SATELLITE_GROUP_GROUP_ID)
                    .table(SatelliteGroups::Table)
                    .col(SatelliteGroups::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SATELLITE_GROUP_GROUP_ID)
                    .table(SatelliteGroups::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SatelliteGroups::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SatelliteGroups {
    Table,
    SatelliteId,
    GroupId,
}
