use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_LAST_UPDATE: &str = "idx-player-last_update";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(string_len(Player::Status, 16).default("standard"))
                    .col(timestamp_null(Player::LastUpdate))
                    .col(boolean(Player::DeactivationMailSent).default(false))
                    .col(timestamp(Player::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_LAST_UPDATE)
                    .table(Player::Table)
                    .col(Player::LastUpdate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_LAST_UPDATE)
                    .table(Player::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Status,
    LastUpdate,
    DeactivationMailSent,
    CreatedAt,
}
