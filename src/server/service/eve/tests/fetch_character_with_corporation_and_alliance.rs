//! Tests for EsiDataService::fetch_character_with_corporation_and_alliance.

use super::*;

/// Expect corporation and alliance to be fetched for a known character
#[tokio::test]
async fn fetches_full_affiliation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_character_affiliation_endpoint(
            vec![factory::mock_affiliation(2112000001, 98000001, Some(99000001))],
            1,
        )
        .with_corporation_endpoint(98000001, factory::mock_corporation(Some(99000001)), 1)
        .with_alliance_endpoint(99000001, factory::mock_alliance(), 1)
        .build()
        .await?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 2112000001, "Main", true)
        .await?;

    let character = EsiDataService::new(&test.db, &test.esi_client)
        .fetch_character_with_corporation_and_alliance(2112000001)
        .await?
        .unwrap();

    assert_eq!(character.corporation_id, Some(98000001));
    let alliance = AllianceRepository::new(&test.db)
        .get(99000001)
        .await?
        .unwrap();
    assert_eq!(alliance.name, "Brave Collective");
    test.assert_mocks();

    Ok(())
}

/// Expect None without any request for an unknown character
#[tokio::test]
async fn unknown_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_character_affiliation_endpoint(Vec::new(), 0)
        .build()
        .await?;

    let character = EsiDataService::new(&test.db, &test.esi_client)
        .fetch_character_with_corporation_and_alliance(2112000001)
        .await?;

    assert!(character.is_none());
    test.assert_mocks();

    Ok(())
}
