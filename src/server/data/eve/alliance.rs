use chrono::Utc;
use eve_esi::model::alliance::Alliance;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct AllianceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AllianceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, alliance_id: i64) -> Result<Option<entity::alliance::Model>, DbErr> {
        entity::prelude::Alliance::find_by_id(alliance_id)
            .one(self.db)
            .await
    }

    /// Get an alliance, creating an empty placeholder if it doesn't exist yet
    pub async fn get_or_create(&self, alliance_id: i64) -> Result<entity::alliance::Model, DbErr> {
        if let Some(alliance) = self.get(alliance_id).await? {
            return Ok(alliance);
        }

        let placeholder = entity::alliance::ActiveModel {
            id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set(String::new()),
            ticker: ActiveValue::Set(String::new()),
            last_update: ActiveValue::Set(None),
        };

        entity::prelude::Alliance::insert(placeholder)
            .on_conflict(
                OnConflict::column(entity::alliance::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        self.get(alliance_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("alliance {}", alliance_id)))
    }

    /// Insert or update an alliance from ESI data
    pub async fn upsert(
        &self,
        alliance_id: i64,
        alliance: &Alliance,
    ) -> Result<entity::alliance::Model, DbErr> {
        let alliance = entity::alliance::ActiveModel {
            id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set(alliance.name.clone()),
            ticker: ActiveValue::Set(alliance.ticker.clone()),
            last_update: ActiveValue::Set(Some(Utc::now().naive_utc())),
        };

        entity::prelude::Alliance::insert(alliance)
            .on_conflict(
                OnConflict::column(entity::alliance::Column::Id)
                    .update_columns([
                        entity::alliance::Column::Name,
                        entity::alliance::Column::Ticker,
                        entity::alliance::Column::LastUpdate,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Get a page of alliance IDs ordered by ID
    pub async fn get_ids(&self, offset: u64, limit: u64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Alliance::find()
            .select_only()
            .column(entity::alliance::Column::Id)
            .order_by_asc(entity::alliance::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Get every `(alliance_id, group_id)` auto assignment
    pub async fn get_group_mappings(&self) -> Result<Vec<(i64, i32)>, DbErr> {
        entity::prelude::AllianceGroup::find()
            .select_only()
            .column(entity::alliance_group::Column::AllianceId)
            .column(entity::alliance_group::Column::GroupId)
            .into_tuple::<(i64, i32)>()
            .all(self.db)
            .await
    }
}
