use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_player::Player;

static FK_GROUP_REQUIRED_GROUP_GROUP_ID: &str = "fk-group_required_group-group_id";
static FK_GROUP_REQUIRED_GROUP_REQUIRED_ID: &str = "fk-group_required_group-required_group_id";
static FK_GROUP_FORBIDDEN_GROUP_GROUP_ID: &str = "fk-group_forbidden_group-group_id";
static FK_GROUP_FORBIDDEN_GROUP_FORBIDDEN_ID: &str =
    "fk-group_forbidden_group-forbidden_group_id";
static FK_PLAYER_GROUP_PLAYER_ID: &str = "fk-player_group-player_id";
static FK_PLAYER_GROUP_GROUP_ID: &str = "fk-player_group-group_id";
static FK_GROUP_APPLICATION_PLAYER_ID: &str = "fk-group_application-player_id";
static FK_GROUP_APPLICATION_GROUP_ID: &str = "fk-group_application-group_id";
static IDX_GROUP_APPLICATION_PLAYER_GROUP: &str = "idx-group_application-player_id-group_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(pk_auto(Groups::Id))
                    .col(string_uniq(Groups::Name))
                    .col(string_len(Groups::Visibility, 16).default("private"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroupRequiredGroup::Table)
                    .if_not_exists()
                    .col(integer(GroupRequiredGroup::GroupId))
                    .col(integer(GroupRequiredGroup::RequiredGroupId))
                    .primary_key(
                        Index::create()
                            .col(GroupRequiredGroup::GroupId)
                            .col(GroupRequiredGroup::RequiredGroupId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroupForbiddenGroup::Table)
                    .if_not_exists()
                    .col(integer(GroupForbiddenGroup::GroupId))
                    .col(integer(GroupForbiddenGroup::ForbiddenGroupId))
                    .primary_key(
                        Index::create()
                            .col(GroupForbiddenGroup::GroupId)
                            .col(GroupForbiddenGroup::ForbiddenGroupId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerGroup::Table)
                    .if_not_exists()
                    .col(integer(PlayerGroup::PlayerId))
                    .col(integer(PlayerGroup::GroupId))
                    .primary_key(
                        Index::create()
                            .col(PlayerGroup::PlayerId)
                            .col(PlayerGroup::GroupId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GroupApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupApplication::Id))
                    .col(integer(GroupApplication::PlayerId))
                    .col(integer(GroupApplication::GroupId))
                    .col(string_len(GroupApplication::Status, 16).default("pending"))
                    .col(timestamp_null(GroupApplication::Created))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GROUP_APPLICATION_PLAYER_GROUP)
                    .table(GroupApplication::Table)
                    .col(GroupApplication::PlayerId)
                    .col(GroupApplication::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        let group_fks = [
            (
                FK_GROUP_REQUIRED_GROUP_GROUP_ID,
                GroupRequiredGroup::Table.into_iden(),
                GroupRequiredGroup::GroupId.into_iden(),
            ),
            (
                FK_GROUP_REQUIRED_GROUP_REQUIRED_ID,
                GroupRequiredGroup::Table.into_iden(),
                GroupRequiredGroup::RequiredGroupId.into_iden(),
            ),
            (
                FK_GROUP_FORBIDDEN_GROUP_GROUP_ID,
                GroupForbiddenGroup::Table.into_iden(),
                GroupForbiddenGroup::GroupId.into_iden(),
            ),
            (
                FK_GROUP_FORBIDDEN_GROUP_FORBIDDEN_ID,
                GroupForbiddenGroup::Table.into_iden(),
                GroupForbiddenGroup::ForbiddenGroupId.into_iden(),
            ),
            (
                FK_PLAYER_GROUP_GROUP_ID,
                PlayerGroup::Table.into_iden(),
                PlayerGroup::GroupId.into_iden(),
            ),
            (
                FK_GROUP_APPLICATION_GROUP_ID,
                GroupApplication::Table.into_iden(),
                GroupApplication::GroupId.into_iden(),
            ),
        ];

        for (name, table, column) in group_fks {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(table)
                        .from_col(column)
                        .to_tbl(Groups::Table)
                        .to_col(Groups::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .to_owned(),
                )
                .await?;
        }

        let player_fks = [
            (
                FK_PLAYER_GROUP_PLAYER_ID,
                PlayerGroup::Table.into_iden(),
                PlayerGroup::PlayerId.into_iden(),
            ),
            (
                FK_GROUP_APPLICATION_PLAYER_ID,
                GroupApplication::Table.into_iden(),
                GroupApplication::PlayerId.into_iden(),
            ),
        ];

        for (name, table, column) in player_fks {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(table)
                        .from_col(column)
                        .to_tbl(Player::Table)
                        .to_col(Player::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupApplication::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerGroup::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GroupForbiddenGroup::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(GroupRequiredGroup::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Groups {
    Table,
    Id,
    Name,
    Visibility,
}

#[derive(DeriveIden)]
enum GroupRequiredGroup {
    Table,
    GroupId,
    RequiredGroupId,
}

#[derive(DeriveIden)]
enum GroupForbiddenGroup {
    Table,
    GroupId,
    ForbiddenGroupId,
}

#[derive(DeriveIden)]
enum PlayerGroup {
    Table,
    PlayerId,
    GroupId,
}

#[derive(DeriveIden)]
enum GroupApplication {
    Table,
    Id,
    PlayerId,
    GroupId,
    Status,
    Created,
}
