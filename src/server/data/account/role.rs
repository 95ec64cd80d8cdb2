use migration::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

/// Role granted to every account on its first login.
pub const ROLE_USER: &str = "user";

/// Sentinel role of requests without a logged in user, never stored.
pub const ROLE_ANONYMOUS: &str = "anonymous";

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new instance of [`RoleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Grant a role to an account, granting it twice is a no-op
    pub async fn add_to_player(&self, player_id: i32, role_id: i32) -> Result<(), DbErr> {
        let player_role = entity::player_role::ActiveModel {
            player_id: sea_orm::ActiveValue::Set(player_id),
            role_id: sea_orm::ActiveValue::Set(role_id),
        };

        entity::prelude::PlayerRole::insert(player_role)
            .on_conflict(
                OnConflict::columns([
                    entity::player_role::Column::PlayerId,
                    entity::player_role::Column::RoleId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Get the names of all roles held by an account, sorted by name
    pub async fn get_names_by_player(&self, player_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::Role::find()
            .select_only()
            .column(entity::role::Column::Name)
            .join(JoinType::InnerJoin, entity::role::Relation::PlayerRole.def())
            .filter(entity::player_role::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::role::Column::Name)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
