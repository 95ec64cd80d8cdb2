use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alliance::Table)
                    .if_not_exists()
                    .col(big_integer(Alliance::Id).primary_key())
                    .col(string(Alliance::Name).default(""))
                    .col(string(Alliance::Ticker).default(""))
                    .col(timestamp_null(Alliance::LastUpdate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alliance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alliance {
    Table,
    Id,
    Name,
    Ticker,
    LastUpdate,
}
