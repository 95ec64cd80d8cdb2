use sea_orm::DatabaseConnection;

use crate::server::{
    command::{collect_ids, UpdateSummary},
    data::account::player::PlayerRepository,
    error::Error,
    service::account::AccountService,
};

/// Make sure every account with characters has a main
///
/// # Returns
/// `updated` counts accounts that got a new main.
pub async fn assure_main(db: &DatabaseConnection) -> Result<UpdateSummary, Error> {
    tracing::info!("Started \"assure-main\"");

    let player_repo = PlayerRepository::new(db);
    let player_ids = collect_ids(|offset, limit| player_repo.get_ids(offset, limit)).await?;

    let account_service = AccountService::new(db);
    let mut summary = UpdateSummary::default();

    for (index, player_id) in player_ids.iter().enumerate() {
        match account_service.assure_main(*player_id).await {
            Ok(Some(character_id)) => {
                tracing::debug!(
                    player_id = %player_id,
                    character_id = %character_id,
                    "New main assigned"
                );
                summary.updated += 1;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!("  Error assuring main of {}: {}", player_id, err);
                summary.failed += 1;
            }
        }

        if (index + 1) % 100 == 0 {
            tracing::info!("  processed {} of {}", index + 1, player_ids.len());
        }
    }

    tracing::info!("Finished \"assure-main\"");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    mod assure_main {
        use neucore_test_utils::prelude::*;

        use crate::server::{
            command::assure_main::assure_main, data::account::character::CharacterRepository,
        };

        /// Expect only accounts without main to get one
        #[tokio::test]
        async fn assigns_missing_mains() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let without_main = test.account().insert_player("Alt").await?;
            test.account()
                .insert_character(without_main.id, 1, "Alt", false)
                .await?;
            let with_main = test.account().insert_player("Main").await?;
            test.account()
                .insert_character(with_main.id, 2, "Main", true)
                .await?;
            test.account().insert_player("Empty").await?;

            let summary = assure_main(&test.db).await?;

            assert_eq!(summary.updated, 1);
            assert_eq!(summary.failed, 0);
            let character = CharacterRepository::new(&test.db).get(1).await?.unwrap();
            assert!(character.main);

            Ok(())
        }
    }
}
