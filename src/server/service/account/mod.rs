//! Account lifecycle: creating accounts, moving and deleting characters and keeping a
//! main character on every account.

pub mod check;

use entity::removed_character::RemovedCharacterReason;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::account::{
        character::CharacterRepository, player::PlayerRepository,
        removed_character::RemovedCharacterRepository,
    },
    error::{account::AccountError, Error},
    model::{
        auth::EveAuthentication,
        db::{CharacterModel, PlayerModel},
    },
};

pub struct AccountService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountService<'a, C> {
    /// Creates a new instance of [`AccountService`]
    ///
    /// Pass a transaction as `db` to make a sequence of calls atomic.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create an account with the character as its main
    ///
    /// # Returns
    /// - `Ok((PlayerModel, CharacterModel))` - The new account and character
    /// - `Err(Error::DbErr)` - The character ID already exists or another database error
    pub async fn create_new_player_with_main(
        &self,
        character_id: i64,
        character_name: &str,
    ) -> Result<(PlayerModel, CharacterModel), Error> {
        let player = PlayerRepository::new(self.db)
            .create(character_name)
            .await?;
        let character = CharacterRepository::new(self.db)
            .create(player.id, character_id, character_name, true)
            .await?;

        Ok((player, character))
    }

    /// Move a character to a new account of its own, as main
    ///
    /// Used when the owner hash changed, the old account keeps a tombstone and gets a
    /// new main if it lost its main.
    pub async fn move_character_to_new_account(
        &self,
        character: CharacterModel,
    ) -> Result<(PlayerModel, CharacterModel), Error> {
        let player = PlayerRepository::new(self.db)
            .create(&character.name)
            .await?;
        let character = self.move_character(character, player.id, true).await?;

        Ok((player, character))
    }

    /// Move a character to another account
    ///
    /// # Behavior
    /// - A [`RemovedCharacterReason::Moved`] tombstone referencing the new account is created
    ///   for the old account
    /// - The character is attached to `new_player_id` with the provided main flag
    /// - The old account gets a new main if the moved character was its main
    pub async fn move_character(
        &self,
        character: CharacterModel,
        new_player_id: i32,
        main: bool,
    ) -> Result<CharacterModel, Error> {
        let old_player_id = character.player_id;

        RemovedCharacterRepository::new(self.db)
            .create(
                &character,
                RemovedCharacterReason::Moved,
                Some(new_player_id),
                None,
            )
            .await?;

        let character = CharacterRepository::new(self.db)
            .set_player(character, new_player_id, main)
            .await?;

        self.assure_main(old_player_id).await?;

        Ok(character)
    }

    /// Delete a character
    ///
    /// # Behavior
    /// - Removals by an admin are only logged, every other reason creates a tombstone
    /// - The account gets a new main if the deleted character was its main
    ///
    /// # Arguments
    /// - `character` - Character to delete
    /// - `reason` - Why the character is removed, [`RemovedCharacterReason::Moved`] is not a
    ///   deletion
    /// - `deleted_by` - Account of the admin deleting the character
    pub async fn delete_character(
        &self,
        character: CharacterModel,
        reason: RemovedCharacterReason,
        deleted_by: Option<i32>,
    ) -> Result<(), Error> {
        if reason == RemovedCharacterReason::DeletedByAdmin {
            tracing::info!(
                admin_player_id = ?deleted_by,
                character_id = %character.id,
                character_name = %character.name,
                player_id = %character.player_id,
                "An admin deleted a character"
            );
        } else {
            RemovedCharacterRepository::new(self.db)
                .create(&character, reason, None, deleted_by)
                .await?;
        }

        let player_id = character.player_id;
        CharacterRepository::new(self.db)
            .delete(character.id)
            .await?;

        self.assure_main(player_id).await?;

        Ok(())
    }

    /// Make sure an account with characters has a main
    ///
    /// If no character is main, the oldest character becomes main and lends its name to the
    /// account. Characters without a creation date count as oldest.
    ///
    /// # Returns
    /// - `Ok(Some(character_id))` - A new main was chosen
    /// - `Ok(None)` - The account already had a main or has no characters
    pub async fn assure_main(&self, player_id: i32) -> Result<Option<i64>, Error> {
        let characters = CharacterRepository::new(self.db)
            .get_many_by_player(player_id)
            .await?;

        if characters.iter().any(|character| character.main) {
            return Ok(None);
        }

        let Some(oldest) = characters
            .iter()
            .min_by_key(|character| (character.created.is_some(), character.created))
        else {
            return Ok(None);
        };

        CharacterRepository::new(self.db)
            .set_main(oldest.id, true)
            .await?;
        PlayerRepository::new(self.db)
            .set_name(player_id, &oldest.name)
            .await?;

        Ok(Some(oldest.id))
    }

    /// Store the data of a successful SSO login on a character
    ///
    /// Name, owner hash, scopes, tokens and last login are replaced. If the character is the
    /// main of its account the account takes its name.
    pub async fn update_and_store_character(
        &self,
        character: CharacterModel,
        eve_auth: &EveAuthentication,
    ) -> Result<CharacterModel, Error> {
        let character = CharacterRepository::new(self.db)
            .update_login_data(character, eve_auth)
            .await?;

        if character.main {
            PlayerRepository::new(self.db)
                .set_name(character.player_id, &character.name)
                .await?;
        }

        Ok(character)
    }

    /// Clear the deactivation mail flag once every character of the account has a valid token
    pub async fn reset_deactivation_mail_sent(&self, player_id: i32) -> Result<(), Error> {
        let player_repo = PlayerRepository::new(self.db);
        let Some(player) = player_repo.get(player_id).await? else {
            return Err(AccountError::PlayerNotFound(player_id).into());
        };

        if !player.deactivation_mail_sent {
            return Ok(());
        }

        let characters = CharacterRepository::new(self.db)
            .get_many_by_player(player_id)
            .await?;

        if characters
            .iter()
            .all(|character| character.valid_token != Some(false))
        {
            player_repo
                .set_deactivation_mail_sent(player_id, false)
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
