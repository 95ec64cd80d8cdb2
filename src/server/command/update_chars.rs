use sea_orm::DatabaseConnection;

use crate::server::{
    command::{collect_ids, pause, UpdateSummary},
    data::account::character::CharacterRepository,
    error::Error,
    service::eve::EsiDataService,
    util::eve::ESI_AFFILIATION_REQUEST_LIMIT,
};

pub const DEFAULT_SLEEP_MS: u64 = 50;

/// Update the corporation of all characters, or of one character, from ESI affiliations
///
/// Characters updated longest ago go first. One affiliation request is sent per
/// [`ESI_AFFILIATION_REQUEST_LIMIT`] characters, `sleep_ms` applies between requests.
pub async fn update_chars(
    db: &DatabaseConnection,
    esi_client: &eve_esi::Client,
    character_id: Option<i64>,
    sleep_ms: u64,
) -> Result<UpdateSummary, Error> {
    tracing::info!("Started \"update-chars\"");

    let character_repo = CharacterRepository::new(db);
    let character_ids = match character_id {
        Some(character_id) => vec![character_id],
        None => {
            collect_ids(|offset, limit| character_repo.get_ids_by_last_update(offset, limit))
                .await?
        }
    };

    let esi_data = EsiDataService::new(db, esi_client);
    let mut summary = UpdateSummary::default();

    for chunk in character_ids.chunks(ESI_AFFILIATION_REQUEST_LIMIT) {
        let stored = match esi_data.update_character_affiliations(chunk.to_vec()).await {
            Ok(stored) => stored,
            Err(err) => {
                tracing::error!("  Failed to store affiliations: {}", err);
                Vec::new()
            }
        };
        // ESI may repeat a character or answer for one that was not requested
        let updated: Vec<i64> = chunk
            .iter()
            .copied()
            .filter(|id| stored.contains(id))
            .collect();

        for character_id in chunk.iter().filter(|id| !updated.contains(id)) {
            tracing::info!("  Character {}: update NOK", character_id);
        }
        if !updated.is_empty() {
            tracing::info!("  Characters {:?}: update OK", updated);
        }

        summary.updated += updated.len();
        summary.failed += chunk.len() - updated.len();

        pause(sleep_ms).await;
    }

    tracing::info!("Finished \"update-chars\"");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    mod update_chars {
        use neucore_test_utils::prelude::*;

        use crate::server::{
            command::{update_chars::update_chars, UpdateSummary},
            data::account::character::CharacterRepository,
        };

        /// Expect characters with an affiliation to be updated and the others counted as failed
        #[tokio::test]
        async fn updates_affiliated_characters() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_account_tables()
                .with_character_affiliation_endpoint(
                    vec![factory::mock_affiliation(2112000001, 98000001, None)],
                    1,
                )
                .build()
                .await?;
            let player = test.account().insert_player("Main").await?;
            test.account()
                .insert_character(player.id, 2112000001, "Main", true)
                .await?;
            test.account()
                .insert_character(player.id, 2112000002, "Alt", false)
                .await?;

            let summary = update_chars(&test.db, &test.esi_client, None, 0).await?;

            assert_eq!(
                summary,
                UpdateSummary {
                    updated: 1,
                    failed: 1
                }
            );
            let character = CharacterRepository::new(&test.db)
                .get(2112000001)
                .await?
                .unwrap();
            assert_eq!(character.corporation_id, Some(98000001));
            test.assert_mocks();

            Ok(())
        }

        /// Expect repeated or unrequested affiliations to count once per requested character
        #[tokio::test]
        async fn counts_each_requested_character_once() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_account_tables()
                .with_character_affiliation_endpoint(
                    vec![
                        factory::mock_affiliation(2112000001, 98000001, None),
                        factory::mock_affiliation(2112000001, 98000001, None),
                        factory::mock_affiliation(2112000009, 98000001, None),
                    ],
                    1,
                )
                .build()
                .await?;
            let player = test.account().insert_player("Main").await?;
            test.account()
                .insert_character(player.id, 2112000001, "Main", true)
                .await?;

            let summary = update_chars(&test.db, &test.esi_client, None, 0).await?;

            assert_eq!(
                summary,
                UpdateSummary {
                    updated: 1,
                    failed: 0
                }
            );
            test.assert_mocks();

            Ok(())
        }
    }
}
