use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_alliance::Alliance, m20251101_000003_corporation::Corporation,
    m20251101_000007_group::Groups,
};

static FK_CORPORATION_GROUP_CORPORATION_ID: &str = "fk-corporation_group-corporation_id";
static FK_CORPORATION_GROUP_GROUP_ID: &str = "fk-corporation_group-group_id";
static FK_ALLIANCE_GROUP_ALLIANCE_ID: &str = "fk-alliance_group-alliance_id";
static FK_ALLIANCE_GROUP_GROUP_ID: &str = "fk-alliance_group-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CorporationGroup::Table)
                    .if_not_exists()
                    .col(big_integer(CorporationGroup::CorporationId))
                    .col(integer(CorporationGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(CorporationGroup::CorporationId)
                            .col(CorporationGroup::GroupId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AllianceGroup::Table)
                    .if_not_exists()
                    .col(big_integer(AllianceGroup::AllianceId))
                    .col(integer(AllianceGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(AllianceGroup::AllianceId)
                            .col(AllianceGroup::GroupId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_GROUP_CORPORATION_ID)
                    .from_tbl(CorporationGroup::Table)
                    .from_col(CorporationGroup::CorporationId)
                    .to_tbl(Corporation::Table)
                    .to_col(Corporation::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CORPORATION_GROUP_GROUP_ID)
                    .from_tbl(CorporationGroup::Table)
                    .from_col(CorporationGroup::GroupId)
                    .to_tbl(Groups::Table)
                    .to_col(Groups::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_GROUP_ALLIANCE_ID)
                    .from_tbl(AllianceGroup::Table)
                    .from_col(AllianceGroup::AllianceId)
                    .to_tbl(Alliance::Table)
                    .to_col(Alliance::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ALLIANCE_GROUP_GROUP_ID)
                    .from_tbl(AllianceGroup::Table)
                    .from_col(AllianceGroup::GroupId)
                    .to_tbl(Groups::Table)
                    .to_col(Groups::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AllianceGroup::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CorporationGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CorporationGroup {
    Table,
    CorporationId,
    GroupId,
}

#[derive(DeriveIden)]
enum AllianceGroup {
    Table,
    AllianceId,
    GroupId,
}
