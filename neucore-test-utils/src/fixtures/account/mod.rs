//! Database fixtures for players, characters, roles and groups.

use chrono::Utc;
use entity::{
    character, group, group_application, group_forbidden_group, group_required_group, player,
    player::PlayerStatus, player_group, player_role, role,
};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    constant::{TEST_OWNER_HASH, TEST_STORED_REFRESH_TOKEN},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn account<'a>(&'a self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }
}

pub struct AccountFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AccountFixtures<'a> {
    /// Insert a standard player account.
    pub async fn insert_player(&self, name: &str) -> Result<player::Model, TestError> {
        self.insert_player_with_status(name, PlayerStatus::Standard)
            .await
    }

    /// Insert a player account with the provided status.
    pub async fn insert_player_with_status(
        &self,
        name: &str,
        status: PlayerStatus,
    ) -> Result<player::Model, TestError> {
        let player = player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            status: ActiveValue::Set(status),
            last_update: ActiveValue::Set(None),
            deactivation_mail_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(player)
    }

    /// Insert a character owned by [`TEST_OWNER_HASH`] without any tokens.
    ///
    /// # Arguments
    /// - `player_id` - Account the character belongs to
    /// - `character_id` - The EVE Online character ID
    /// - `name` - Character name
    /// - `main` - Whether the character is the main of the account
    pub async fn insert_character(
        &self,
        player_id: i32,
        character_id: i64,
        name: &str,
        main: bool,
    ) -> Result<character::Model, TestError> {
        let character = character::ActiveModel {
            id: ActiveValue::Set(character_id),
            player_id: ActiveValue::Set(player_id),
            name: ActiveValue::Set(name.to_string()),
            main: ActiveValue::Set(main),
            character_owner_hash: ActiveValue::Set(Some(TEST_OWNER_HASH.to_string())),
            access_token: ActiveValue::Set(None),
            refresh_token: ActiveValue::Set(None),
            expires: ActiveValue::Set(None),
            valid_token: ActiveValue::Set(None),
            valid_token_time: ActiveValue::Set(None),
            scopes: ActiveValue::Set(None),
            corporation_id: ActiveValue::Set(None),
            created: ActiveValue::Set(Some(Utc::now().naive_utc())),
            last_login: ActiveValue::Set(None),
            last_update: ActiveValue::Set(None),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(character)
    }

    /// Insert a character holding a valid token bundle.
    ///
    /// # Arguments
    /// - `expires` - Unix timestamp of the access token expiry, a past value forces a refresh
    pub async fn insert_character_with_token(
        &self,
        player_id: i32,
        character_id: i64,
        name: &str,
        main: bool,
        expires: i64,
    ) -> Result<character::Model, TestError> {
        let character = self
            .insert_character(player_id, character_id, name, main)
            .await?;

        let mut active: character::ActiveModel = character.into();
        active.access_token = ActiveValue::Set(Some("stored_access_token".to_string()));
        active.refresh_token = ActiveValue::Set(Some(TEST_STORED_REFRESH_TOKEN.to_string()));
        active.expires = ActiveValue::Set(Some(expires));
        active.valid_token = ActiveValue::Set(Some(true));
        active.scopes = ActiveValue::Set(Some("publicData".to_string()));

        Ok(active.update(&self.setup.db).await?)
    }

    /// Insert a role by name.
    pub async fn insert_role(&self, name: &str) -> Result<role::Model, TestError> {
        let role = role::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(role)
    }

    /// Grant a role to a player.
    pub async fn insert_player_role(&self, player_id: i32, role_id: i32) -> Result<(), TestError> {
        player_role::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Insert a private group by name.
    pub async fn insert_group(&self, name: &str) -> Result<group::Model, TestError> {
        let group = group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            visibility: ActiveValue::Set(group::GroupVisibility::Private),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(group)
    }

    /// Add a player to a group.
    pub async fn insert_player_group(
        &self,
        player_id: i32,
        group_id: i32,
    ) -> Result<(), TestError> {
        player_group::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            group_id: ActiveValue::Set(group_id),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Declare that membership in `group_id` requires membership in `required_group_id`.
    pub async fn insert_required_group(
        &self,
        group_id: i32,
        required_group_id: i32,
    ) -> Result<(), TestError> {
        group_required_group::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            required_group_id: ActiveValue::Set(required_group_id),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Declare that membership in `group_id` is forbidden for members of `forbidden_group_id`.
    pub async fn insert_forbidden_group(
        &self,
        group_id: i32,
        forbidden_group_id: i32,
    ) -> Result<(), TestError> {
        group_forbidden_group::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            forbidden_group_id: ActiveValue::Set(forbidden_group_id),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Insert an accepted application of a player for a group.
    pub async fn insert_group_application(
        &self,
        player_id: i32,
        group_id: i32,
    ) -> Result<group_application::Model, TestError> {
        let application = group_application::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            group_id: ActiveValue::Set(group_id),
            status: ActiveValue::Set(group_application::ApplicationStatus::Accepted),
            created: ActiveValue::Set(Some(Utc::now().naive_utc())),
            ..Default::default()
        }
        .insert(&self.setup.db)
        .await?;

        Ok(application)
    }
}
