use chrono::Utc;
use eve_esi::model::corporation::Corporation;
use migration::OnConflict;
use sea_orm::{
    sea_query::NullOrdering, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::corporation::Model>, DbErr> {
        entity::prelude::Corporation::find_by_id(corporation_id)
            .one(self.db)
            .await
    }

    /// Get all corporations with the provided IDs, unknown IDs are skipped
    pub async fn get_many(
        &self,
        corporation_ids: &[i64],
    ) -> Result<Vec<entity::corporation::Model>, DbErr> {
        entity::prelude::Corporation::find()
            .filter(entity::corporation::Column::Id.is_in(corporation_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Get a corporation, creating an empty placeholder if it doesn't exist yet
    ///
    /// Placeholders have no name, no ticker and no last update so the next
    /// `update-corporations` run fetches them first.
    pub async fn get_or_create(
        &self,
        corporation_id: i64,
    ) -> Result<entity::corporation::Model, DbErr> {
        if let Some(corporation) = self.get(corporation_id).await? {
            return Ok(corporation);
        }

        let placeholder = entity::corporation::ActiveModel {
            id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(String::new()),
            ticker: ActiveValue::Set(String::new()),
            alliance_id: ActiveValue::Set(None),
            last_update: ActiveValue::Set(None),
        };

        entity::prelude::Corporation::insert(placeholder)
            .on_conflict(
                OnConflict::column(entity::corporation::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        self.get(corporation_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("corporation {}", corporation_id)))
    }

    /// Insert or update a corporation from ESI data
    ///
    /// # Notes
    /// - The alliance must exist in the alliance table due to the foreign key constraint
    pub async fn upsert(
        &self,
        corporation_id: i64,
        corporation: &Corporation,
    ) -> Result<entity::corporation::Model, DbErr> {
        let corporation = entity::corporation::ActiveModel {
            id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(corporation.name.clone()),
            ticker: ActiveValue::Set(corporation.ticker.clone()),
            alliance_id: ActiveValue::Set(corporation.alliance_id),
            last_update: ActiveValue::Set(Some(Utc::now().naive_utc())),
        };

        entity::prelude::Corporation::insert(corporation)
            .on_conflict(
                OnConflict::column(entity::corporation::Column::Id)
                    .update_columns([
                        entity::corporation::Column::Name,
                        entity::corporation::Column::Ticker,
                        entity::corporation::Column::AllianceId,
                        entity::corporation::Column::LastUpdate,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Get a page of corporation IDs, never fetched corporations first
    pub async fn get_ids_by_last_update(&self, offset: u64, limit: u64) -> Result<Vec<i64>, DbErr> {
        entity::prelude::Corporation::find()
            .select_only()
            .column(entity::corporation::Column::Id)
            .order_by_with_nulls(
                entity::corporation::Column::LastUpdate,
                Order::Asc,
                NullOrdering::First,
            )
            .order_by_asc(entity::corporation::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_tuple::<i64>()
            .all(self.db)
            .await
    }

    /// Get every `(corporation_id, group_id)` auto assignment
    pub async fn get_group_mappings(&self) -> Result<Vec<(i64, i32)>, DbErr> {
        entity::prelude::CorporationGroup::find()
            .select_only()
            .column(entity::corporation_group::Column::CorporationId)
            .column(entity::corporation_group::Column::GroupId)
            .into_tuple::<(i64, i32)>()
            .all(self.db)
            .await
    }
}
