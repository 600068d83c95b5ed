use sea_orm_migration::{prelude::*, schema::*};

static IDX_SATELLITE_NAME: &str = "idx-satellites-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Satellites::Table)
                    .if_not_exists()
                    .col(pk_auto(Satellites::Id))
                    .col(string(Satellites::Name))
                    .col(text(Satellites::Line1))
                    .col(text(Satellites::Line2))
                    .col(integer(Satellites::Status).default(1))
                    .col(timestamp(Satellites::CreatedAt))
                    .col(timestamp(Satellites::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SATELLITE_NAME)
                    .table(Satellites::Table)
                    .col(Satellites::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SATELLITE_NAME)
                    .table(Satellites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Satellites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Satellites {
    Table,
    Id,
    Name,
    Line1,
    Line2,
    Status,
    CreatedAt,
    UpdatedAt,
}
