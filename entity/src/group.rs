use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum GroupVisibility {
    #[sea_orm(string_value = "private")]
    Private,
    #[sea_orm(string_value = "public")]
    Public,
    #[sea_orm(string_value = "conditioned")]
    Conditioned,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub visibility: GroupVisibility,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_group::Entity")]
    PlayerGroup,
    #[sea_orm(has_many = "super::group_application::Entity")]
    GroupApplication,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        super::player_group::Relation::Player.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::player_group::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
