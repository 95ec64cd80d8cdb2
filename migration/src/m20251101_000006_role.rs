use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_player::Player;

static FK_PLAYER_ROLE_PLAYER_ID: &str = "fk-player_role-player_id";
static FK_PLAYER_ROLE_ROLE_ID: &str = "fk-player_role-role_id";

/// Roles known to the application, `user` is granted to every account on login.
const ROLES: [&str; 14] = [
    "user",
    "user-admin",
    "user-manager",
    "group-admin",
    "group-manager",
    "app-admin",
    "app-manager",
    "esi",
    "settings",
    "tracking",
    "tracking-admin",
    "watchlist",
    "watchlist-manager",
    "watchlist-admin",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(pk_auto(Role::Id))
                    .col(string_uniq(Role::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlayerRole::Table)
                    .if_not_exists()
                    .col(integer(PlayerRole::PlayerId))
                    .col(integer(PlayerRole::RoleId))
                    .primary_key(
                        Index::create()
                            .col(PlayerRole::PlayerId)
                            .col(PlayerRole::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_ROLE_PLAYER_ID)
                    .from_tbl(PlayerRole::Table)
                    .from_col(PlayerRole::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_ROLE_ROLE_ID)
                    .from_tbl(PlayerRole::Table)
                    .from_col(PlayerRole::RoleId)
                    .to_tbl(Role::Table)
                    .to_col(Role::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Role::Table).columns([Role::Name]);
        for role in ROLES {
            seed.values_panic([role.into()]);
        }
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_ROLE_ROLE_ID)
                    .table(PlayerRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PLAYER_ROLE_PLAYER_ID)
                    .table(PlayerRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerRole::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Role {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum PlayerRole {
    Table,
    PlayerId,
    RoleId,
}
