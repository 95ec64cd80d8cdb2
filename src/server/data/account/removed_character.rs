use chrono::Utc;
use entity::removed_character::RemovedCharacterReason;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Tombstones are written once and never updated.
pub struct RemovedCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RemovedCharacterRepository<'a, C> {
    /// Creates a new instance of [`RemovedCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Record a character leaving an account
    ///
    /// # Arguments
    /// - `character` - The character as it was before removal
    /// - `reason` - Why the character was removed
    /// - `new_player_id` - Destination account, only set for [`RemovedCharacterReason::Moved`]
    /// - `deleted_by` - Account of the admin who deleted the character, if any
    pub async fn create(
        &self,
        character: &entity::character::Model,
        reason: RemovedCharacterReason,
        new_player_id: Option<i32>,
        deleted_by: Option<i32>,
    ) -> Result<entity::removed_character::Model, DbErr> {
        let removed_character = entity::removed_character::ActiveModel {
            player_id: ActiveValue::Set(character.player_id),
            new_player_id: ActiveValue::Set(new_player_id),
            deleted_by: ActiveValue::Set(deleted_by),
            character_id: ActiveValue::Set(character.id),
            character_name: ActiveValue::Set(character.name.clone()),
            removed_date: ActiveValue::Set(Utc::now().naive_utc()),
            reason: ActiveValue::Set(reason),
            ..Default::default()
        };

        removed_character.insert(self.db).await
    }

    /// Gets all tombstones of characters that left the provided account, oldest first
    pub async fn get_many_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::removed_character::Model>, DbErr> {
        entity::prelude::RemovedCharacter::find()
            .filter(entity::removed_character::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::removed_character::Column::Id)
            .all(self.db)
            .await
    }
}
