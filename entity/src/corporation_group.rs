use sea_orm::entity::prelude::*;

/// Groups automatically granted to members of a corporation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corporation_group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub corporation_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::corporation::Entity",
        from = "Column::CorporationId",
        to = "super::corporation::Column::Id"
    )]
    Corporation,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
}

impl Related<super::corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Corporation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
