use sea_orm::entity::prelude::*;

/// Account status, `managed` accounts are excluded from automatic group assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PlayerStatus {
    #[sea_orm(string_value = "standard")]
    Standard,
    #[sea_orm(string_value = "managed")]
    Managed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub status: PlayerStatus,
    pub last_update: Option<DateTime>,
    pub deactivation_mail_sent: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::player_group::Entity")]
    PlayerGroup,
    #[sea_orm(has_many = "super::player_role::Entity")]
    PlayerRole,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        super::player_group::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::player_group::Relation::Player.def().rev())
    }
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        super::player_role::Relation::Role.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::player_role::Relation::Player.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
