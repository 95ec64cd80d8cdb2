use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, NullOrdering},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, Order, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::auth::{EveAuthentication, TokenBundle};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a character without tokens
    ///
    /// # Arguments
    /// - `player_id` - Account the character is attached to
    /// - `character_id` - EVE Online character ID, used as primary key
    /// - `name` - Character name
    /// - `main` - Whether the character is the main of the account
    pub async fn create(
        &self,
        player_id: i32,
        character_id: i64,
        name: &str,
        main: bool,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            id: ActiveValue::Set(character_id),
            player_id: ActiveValue::Set(player_id),
            name: ActiveValue::Set(name.to_string()),
            main: ActiveValue::Set(main),
            character_owner_hash: ActiveValue::Set(None),
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
        };

        character.insert(self.db).await
    }

    pub async fn get(&self, character_id: i64) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Get a character along with the account it belongs to
    pub async fn get_with_player(
        &self,
        character_id: i64,
    ) -> Result<Option<(entity::character::Model, Option<entity::player::Model>)>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::prelude::Player)
            .one(self.db)
            .await
    }

    /// Gets all characters of an account ordered by character ID
    pub async fn get_many_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Attach a character to another account
    pub async fn set_player(
        &self,
        character: entity::character::Model,
        player_id: i32,
        main: bool,
    ) -> Result<entity::character::Model, DbErr> {
        let mut character_am = character.into_active_model();
        character_am.player_id = ActiveValue::Set(player_id);
        character_am.main = ActiveValue::Set(main);

        character_am.update(self.db).await
    }

    pub async fn set_main(&self, character_id: i64, main: bool) -> Result<(), DbErr> {
        entity::prelude::Character::update_many()
            .col_expr(entity::character::Column::Main, Expr::value(main))
            .filter(entity::character::Column::Id.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Store the data of a successful SSO login on the character
    ///
    /// Name, owner hash, scopes and the full token bundle are replaced and the last login
    /// is set to now. The token counts as valid if any scopes were granted, otherwise its
    /// validity is unknown.
    pub async fn update_login_data(
        &self,
        character: entity::character::Model,
        eve_auth: &EveAuthentication,
    ) -> Result<entity::character::Model, DbErr> {
        let valid_token = if eve_auth.scopes.is_empty() {
            None
        } else {
            Some(true)
        };
        let previous_valid_token = character.valid_token;

        let mut character_am = character.into_active_model();
        character_am.name = ActiveValue::Set(eve_auth.character_name.clone());
        character_am.last_login = ActiveValue::Set(Some(Utc::now().naive_utc()));
        character_am.character_owner_hash =
            ActiveValue::Set(Some(eve_auth.character_owner_hash.clone()));
        character_am.scopes = ActiveValue::Set(Some(eve_auth.scopes_string()));
        set_token_fields(&mut character_am, &eve_auth.token);
        set_valid_token_fields(&mut character_am, previous_valid_token, valid_token);

        character_am.update(self.db).await
    }

    /// Set the token validity, `valid_token_time` only changes along with the value
    pub async fn set_valid_token(
        &self,
        character: entity::character::Model,
        valid_token: Option<bool>,
    ) -> Result<entity::character::Model, DbErr> {
        let previous_valid_token = character.valid_token;

        let mut character_am = character.into_active_model();
        set_valid_token_fields(&mut character_am, previous_valid_token, valid_token);

        character_am.update(self.db).await
    }

    /// Store a refreshed token bundle together with its validity
    pub async fn store_tokens(
        &self,
        character: entity::character::Model,
        token: &TokenBundle,
        valid_token: Option<bool>,
    ) -> Result<entity::character::Model, DbErr> {
        let previous_valid_token = character.valid_token;

        let mut character_am = character.into_active_model();
        set_token_fields(&mut character_am, token);
        set_valid_token_fields(&mut character_am, previous_valid_token, valid_token);

        character_am.update(self.db).await
    }

    /// Remove the access token and its expiry, the refresh token is kept
    pub async fn clear_access_token(
        &self,
        character: entity::character::Model,
    ) -> Result<entity::character::Model, DbErr> {
        let mut character_am = character.into_active_model();
        character_am.access_token = ActiveValue::Set(None);
        character_am.expires = ActiveValue::Set(None);

        character_am.update(self.db).await
    }

    /// Set the corporation of a character and mark it as updated
    ///
    /// # Notes
    /// - The corporation must exist due to the foreign key constraint
    pub async fn set_corporation(
        &self,
        character_id: i64,
        corporation_id: Option<i64>,
    ) -> Result<(), DbErr> {
        entity::prelude::Character::update_many()
            .col_expr(
                entity::character::Column::CorporationId,
                Expr::value(corporation_id),
            )
            .col_expr(
                entity::character::Column::LastUpdate,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::character::Column::Id.eq(character_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing, check
    /// [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, character_id: i64) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }

    /// Get a page of character IDs ordered by ID
    pub async fn get_ids(&self, offset: u64, limit: u64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Character::find()
            .select_only()
            .column(entity::character::Column::Id)
            .order_by_asc(entity::character::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Get a page of character IDs, least recently updated first
    pub async fn get_ids_by_last_update(&self, offset: u64, limit: u64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Character::find()
            .select_only()
            .column(entity::character::Column::Id)
            .order_by_with_nulls(
                entity::character::Column::LastUpdate,
                Order::Asc,
                NullOrdering::First,
            )
            .order_by_asc(entity::character::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }
}

fn set_token_fields(character_am: &mut entity::character::ActiveModel, token: &TokenBundle) {
    character_am.access_token = ActiveValue::Set(Some(token.access_token.clone()));
    character_am.refresh_token = ActiveValue::Set(
        Some(token.refresh_token.clone()).filter(|refresh_token| !refresh_token.is_empty()),
    );
    character_am.expires = ActiveValue::Set(token.expires);
}

fn set_valid_token_fields(
    character_am: &mut entity::character::ActiveModel,
    previous: Option<bool>,
    valid_token: Option<bool>,
) {
    character_am.valid_token = ActiveValue::Set(valid_token);
    if previous != valid_token {
        character_am.valid_token_time = ActiveValue::Set(Some(Utc::now().naive_utc()));
    }
}
