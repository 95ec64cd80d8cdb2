//! Database fixtures for corporations, alliances and their auto-assigned groups.

use chrono::Utc;
use entity::{alliance, alliance_group, corporation, corporation_group};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::eve::EveFixtures};

impl<'a> EveFixtures<'a> {
    /// Insert an alliance, or return the existing row.
    pub async fn insert_alliance(&self, alliance_id: i64) -> Result<alliance::Model, TestError> {
        if let Some(existing) = alliance::Entity::find_by_id(alliance_id)
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing);
        }

        let alliance = alliance::ActiveModel {
            id: ActiveValue::Set(alliance_id),
            name: ActiveValue::Set(format!("Alliance {}", alliance_id)),
            ticker: ActiveValue::Set("ALLI".to_string()),
            last_update: ActiveValue::Set(Some(Utc::now().naive_utc())),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(alliance)
    }

    /// Insert a corporation along with its alliance if one is provided.
    ///
    /// # Arguments
    /// - `corporation_id` - The EVE Online corporation ID
    /// - `alliance_id` - Optional alliance ID, created if it doesn't exist yet
    pub async fn insert_corporation(
        &self,
        corporation_id: i64,
        alliance_id: Option<i64>,
    ) -> Result<corporation::Model, TestError> {
        if let Some(alliance_id) = alliance_id {
            self.insert_alliance(alliance_id).await?;
        }

        let corporation = corporation::ActiveModel {
            id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(format!("Corporation {}", corporation_id)),
            ticker: ActiveValue::Set("CORP".to_string()),
            alliance_id: ActiveValue::Set(alliance_id),
            last_update: ActiveValue::Set(Some(Utc::now().naive_utc())),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(corporation)
    }

    /// Insert a corporation placeholder with no name and no last update, as created by login.
    pub async fn insert_corporation_placeholder(
        &self,
        corporation_id: i64,
    ) -> Result<corporation::Model, TestError> {
        let corporation = corporation::ActiveModel {
            id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(String::new()),
            ticker: ActiveValue::Set(String::new()),
            alliance_id: ActiveValue::Set(None),
            last_update: ActiveValue::Set(None),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(corporation)
    }

    /// Configure a group to be granted automatically to members of the corporation.
    pub async fn insert_corporation_group(
        &self,
        corporation_id: i64,
        group_id: i32,
    ) -> Result<(), TestError> {
        corporation_group::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            group_id: ActiveValue::Set(group_id),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(())
    }

    /// Configure a group to be granted automatically to members of the alliance.
    pub async fn insert_alliance_group(
        &self,
        alliance_id: i64,
        group_id: i32,
    ) -> Result<(), TestError> {
        alliance_group::ActiveModel {
            alliance_id: ActiveValue::Set(alliance_id),
            group_id: ActiveValue::Set(group_id),
        }
        .insert(&self.setup.db)
        .await?;

        Ok(())
    }
}
