use sea_orm::entity::prelude::*;

/// `group_id` may only be held together with at least one of its required groups.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_required_group")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub group_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub required_group_id: i32,
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
        from = "Column::RequiredGroupId",
        to = "super::group::Column::Id"
    )]
    RequiredGroup,
}

impl ActiveModelBehavior for ActiveModel {}
