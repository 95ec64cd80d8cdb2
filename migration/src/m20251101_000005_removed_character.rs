use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_player::Player;

static IDX_REMOVED_CHARACTER_CHARACTER_ID: &str = "idx-removed_character-character_id";
static FK_REMOVED_CHARACTER_PLAYER_ID: &str = "fk-removed_character-player_id";
static FK_REMOVED_CHARACTER_NEW_PLAYER_ID: &str = "fk-removed_character-new_player_id";
static FK_REMOVED_CHARACTER_DELETED_BY: &str = "fk-removed_character-deleted_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RemovedCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(RemovedCharacter::Id))
                    .col(integer(RemovedCharacter::PlayerId))
                    .col(integer_null(RemovedCharacter::NewPlayerId))
                    .col(integer_null(RemovedCharacter::DeletedBy))
                    .col(big_integer(RemovedCharacter::CharacterId))
                    .col(string(RemovedCharacter::CharacterName))
                    .col(timestamp(RemovedCharacter::RemovedDate))
                    .col(string_len(RemovedCharacter::Reason, 32))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REMOVED_CHARACTER_CHARACTER_ID)
                    .table(RemovedCharacter::Table)
                    .col(RemovedCharacter::CharacterId)
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            (FK_REMOVED_CHARACTER_PLAYER_ID, RemovedCharacter::PlayerId),
            (FK_REMOVED_CHARACTER_NEW_PLAYER_ID, RemovedCharacter::NewPlayerId),
            (FK_REMOVED_CHARACTER_DELETED_BY, RemovedCharacter::DeletedBy),
        ] {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(RemovedCharacter::Table)
                        .from_col(column)
                        .to_tbl(Player::Table)
                        .to_col(Player::Id)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            FK_REMOVED_CHARACTER_DELETED_BY,
            FK_REMOVED_CHARACTER_NEW_PLAYER_ID,
            FK_REMOVED_CHARACTER_PLAYER_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(RemovedCharacter::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REMOVED_CHARACTER_CHARACTER_ID)
                    .table(RemovedCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RemovedCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RemovedCharacter {
    Table,
    Id,
    PlayerId,
    NewPlayerId,
    DeletedBy,
    CharacterId,
    CharacterName,
    RemovedDate,
    Reason,
}
