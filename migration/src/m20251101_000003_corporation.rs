use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_alliance::Alliance;

static FK_CORPORATION_ALLIANCE_ID: &str = "fk-corporation-alliance_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Corporation::Table)
                    .if_not_exists()
                    .col(big_integer(Corporation::Id).primary_key())
                    .col(string(Corporation::Name).default(""))
                    .col(string(Corporation::Ticker).default(""))
                    .col(big_integer_null(Corporation::AllianceId))
                    .col(timestamp_null(Corporation::LastUpdate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_ALLIANCE_ID)
                    .from_tbl(Corporation::Table)
                    .from_col(Corporation::AllianceId)
                    .to_tbl(Alliance::Table)
                    .to_col(Alliance::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CORPORATION_ALLIANCE_ID)
                    .table(Corporation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Corporation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Corporation {
    Table,
    Id,
    Name,
    Ticker,
    AllianceId,
    LastUpdate,
}
