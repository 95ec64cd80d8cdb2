use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RemovedCharacterReason {
    /// Character was moved to another account, `new_player_id` is set
    #[sea_orm(string_value = "moved")]
    Moved,
    #[sea_orm(string_value = "deleted-manually")]
    DeletedManually,
    #[sea_orm(string_value = "deleted-biomassed")]
    DeletedBiomassed,
    #[sea_orm(string_value = "deleted-owner-changed")]
    DeletedOwnerChanged,
    #[sea_orm(string_value = "deleted-by-admin")]
    DeletedByAdmin,
}

/// Audit record of a character leaving an account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "removed_character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub new_player_id: Option<i32>,
    pub deleted_by: Option<i32>,
    pub character_id: i64,
    pub character_name: String,
    pub removed_date: DateTime,
    pub reason: RemovedCharacterReason,
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
        belongs_to = "super::player::Entity",
        from = "Column::NewPlayerId",
        to = "super::player::Column::Id"
    )]
    NewPlayer,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::DeletedBy",
        to = "super::player::Column::Id"
    )]
    DeletedBy,
}

impl ActiveModelBehavior for ActiveModel {}
