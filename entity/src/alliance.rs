use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "alliance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub ticker: String,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::corporation::Entity")]
    Corporation,
    #[sea_orm(has_many = "super::alliance_group::Entity")]
    AllianceGroup,
}

impl Related<super::corporation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Corporation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
