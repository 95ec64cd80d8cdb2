use sea_orm::entity::prelude::*;

/// `group_id` may not be held together with any of its forbidden groups.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_forbidden_group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub forbidden_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::ForbiddenGroupId",
        to = "super::group::Column::Id"
    )]
    ForbiddenGroup,
}

impl ActiveModelBehavior for ActiveModel {}
