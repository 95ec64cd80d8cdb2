use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_player::Player, m20251101_000003_corporation::Corporation};

static IDX_CHARACTER_PLAYER_ID: &str = "idx-character-player_id";
static IDX_CHARACTER_LAST_UPDATE: &str = "idx-character-last_update";
static FK_CHARACTER_PLAYER_ID: &str = "fk-character-player_id";
static FK_CHARACTER_CORPORATION_ID: &str = "fk-character-corporation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(big_integer(Character::Id).primary_key())
                    .col(integer(Character::PlayerId))
                    .col(string(Character::Name))
                    .col(boolean(Character::Main).default(false))
                    .col(string_null(Character::CharacterOwnerHash))
                    .col(text_null(Character::AccessToken))
                    .col(text_null(Character::RefreshToken))
                    .col(big_integer_null(Character::Expires))
                    .col(boolean_null(Character::ValidToken))
                    .col(timestamp_null(Character::ValidTokenTime))
                    .col(text_null(Character::Scopes))
                    .col(big_integer_null(Character::CorporationId))
                    .col(timestamp_null(Character::Created))
                    .col(timestamp_null(Character::LastLogin))
                    .col(timestamp_null(Character::LastUpdate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_PLAYER_ID)
                    .table(Character::Table)
                    .col(Character::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_LAST_UPDATE)
                    .table(Character::Table)
                    .col(Character::LastUpdate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_PLAYER_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::PlayerId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CHARACTER_CORPORATION_ID)
                    .from_tbl(Character::Table)
                    .from_col(Character::CorporationId)
                    .to_tbl(Corporation::Table)
                    .to_col(Corporation::Id)
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
                    .name(FK_CHARACTER_CORPORATION_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CHARACTER_PLAYER_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_LAST_UPDATE)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_PLAYER_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Character {
    Table,
    Id,
    PlayerId,
    Name,
    Main,
    CharacterOwnerHash,
    AccessToken,
    RefreshToken,
    Expires,
    ValidToken,
    ValidTokenTime,
    Scopes,
    CorporationId,
    Created,
    LastLogin,
    LastUpdate,
}
