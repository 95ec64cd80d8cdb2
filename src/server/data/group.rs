use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Membership, condition and application queries for groups.
pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    /// Creates a new instance of [`GroupRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the IDs of all groups an account is a member of, ordered by ID
    pub async fn get_player_group_ids(&self, player_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::PlayerGroup::find()
            .select_only()
            .column(entity::player_group::Column::GroupId)
            .filter(entity::player_group::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::player_group::Column::GroupId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Add an account to a group, adding an existing member is a no-op
    pub async fn add_player_group(&self, player_id: i32, group_id: i32) -> Result<(), DbErr> {
        let player_group = entity::player_group::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            group_id: ActiveValue::Set(group_id),
        };

        entity::prelude::PlayerGroup::insert(player_group)
            .on_conflict(
                OnConflict::columns([
                    entity::player_group::Column::PlayerId,
                    entity::player_group::Column::GroupId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Remove an account from a group
    ///
    /// # Returns
    /// - `Ok(true)` - The account was a member
    /// - `Ok(false)` - The account wasn't a member of the group
    pub async fn remove_player_group(&self, player_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::PlayerGroup::delete_many()
            .filter(entity::player_group::Column::PlayerId.eq(player_id))
            .filter(entity::player_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Get `(group_id, required_group_id)` pairs for the provided groups
    pub async fn get_required_groups(&self, group_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::GroupRequiredGroup::find()
            .select_only()
            .column(entity::group_required_group::Column::GroupId)
            .column(entity::group_required_group::Column::RequiredGroupId)
            .filter(entity::group_required_group::Column::GroupId.is_in(group_ids.iter().copied()))
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    /// Get `(group_id, forbidden_group_id)` pairs for the provided groups
    pub async fn get_forbidden_groups(&self, group_ids: &[i32]) -> Result<Vec<(i32, i32)>, DbErr> {
        entity::prelude::GroupForbiddenGroup::find()
            .select_only()
            .column(entity::group_forbidden_group::Column::GroupId)
            .column(entity::group_forbidden_group::Column::ForbiddenGroupId)
            .filter(
                entity::group_forbidden_group::Column::GroupId.is_in(group_ids.iter().copied()),
            )
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await
    }

    /// Delete every application of an account for a group
    pub async fn delete_applications(&self, player_id: i32, group_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::GroupApplication::delete_many()
            .filter(entity::group_application::Column::PlayerId.eq(player_id))
            .filter(entity::group_application::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
