use chrono::Utc;
use entity::player::PlayerStatus;
use sea_orm::{
    sea_query::{Expr, NullOrdering},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a standard account
    pub async fn create(&self, name: &str) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            status: ActiveValue::Set(PlayerStatus::Standard),
            last_update: ActiveValue::Set(None),
            deactivation_mail_sent: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    pub async fn get(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Get an account together with its characters, ordered by character ID
    pub async fn get_with_characters(
        &self,
        player_id: i32,
    ) -> Result<Option<(entity::player::Model, Vec<entity::character::Model>)>, DbErr> {
        let Some(player) = self.get(player_id).await? else {
            return Ok(None);
        };

        let characters = entity::prelude::Character::find()
            .filter(entity::character::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some((player, characters)))
    }

    /// Set the display name of an account
    ///
    /// Returns OK regardless of the account existing.
    pub async fn set_name(&self, player_id: i32, name: &str) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .col_expr(entity::player::Column::Name, Expr::value(name.to_string()))
            .filter(entity::player::Column::Id.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Mark the account's groups as freshly computed
    pub async fn set_last_update(&self, player_id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::LastUpdate,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::player::Column::Id.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_deactivation_mail_sent(
        &self,
        player_id: i32,
        sent: bool,
    ) -> Result<(), DbErr> {
        entity::prelude::Player::update_many()
            .col_expr(
                entity::player::Column::DeactivationMailSent,
                Expr::value(sent),
            )
            .filter(entity::player::Column::Id.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Get a page of standard account IDs, least recently updated first
    ///
    /// Accounts that were never updated come first.
    pub async fn get_standard_ids_by_last_update(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Id)
            .filter(entity::player::Column::Status.eq(PlayerStatus::Standard))
            .order_by_with_nulls(
                entity::player::Column::LastUpdate,
                Order::Asc,
                NullOrdering::First,
            )
            .order_by_asc(entity::player::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Get a page of all account IDs ordered by ID
    pub async fn get_ids(&self, offset: u64, limit: u64) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Id)
            .order_by_asc(entity::player::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
