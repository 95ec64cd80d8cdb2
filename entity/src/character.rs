use sea_orm::entity::prelude::*;

/// A single EVE Online character, keyed by the id issued by EVE SSO.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub player_id: i32,
    pub name: String,
    pub main: bool,
    pub character_owner_hash: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub access_token: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) at which the access token expires
    pub expires: Option<i64>,
    /// `None` means unknown, e.g. the character was logged in without scopes
    pub valid_token: Option<bool>,
    pub valid_token_time: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub scopes: Option<String>,
    pub corporation_id: Option<i64>,
    pub created: Option<DateTime>,
    pub last_login: Option<DateTime>,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::corporation::Entity",
        from = "Column::CorporationId",
        to = "super::corporation::Column::Id"
    )]
    Corporation,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Corporation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
