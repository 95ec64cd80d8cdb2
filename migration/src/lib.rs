pub use sea_orm_migration::prelude::*;

mod m20251101_000001_player;
mod m20251101_000002_alliance;
mod m20251101_000003_corporation;
mod m20251101_000004_character;
mod m20251101_000005_removed_character;
mod m20251101_000006_role;
mod m20251101_000007_group;
mod m20251101_000008_auto_group;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_player::Migration),
            Box::new(m20251101_000002_alliance::Migration),
            Box::new(m20251101_000003_corporation::Migration),
            Box::new(m20251101_000004_character::Migration),
            Box::new(m20251101_000005_removed_character::Migration),
            Box::new(m20251101_000006_role::Migration),
            Box::new(m20251101_000007_group::Migration),
            Box::new(m20251101_000008_auto_group::Migration),
        ]
    }
}
