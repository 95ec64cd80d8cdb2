//! Tests for EsiDataService::update_character_affiliations.

use super::*;

/// Expect the corporation to be set with a placeholder for an unknown corporation
#[tokio::test]
async fn sets_corporation_with_placeholder() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_character_affiliation_endpoint(
            vec![factory::mock_affiliation(2112000001, 98000001, Some(99000001))],
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

    let updated = EsiDataService::new(&test.db, &test.esi_client)
        .update_character_affiliations(vec![2112000001, 2112000002])
        .await?;

    assert_eq!(updated, vec![2112000001]);

    let character = CharacterRepository::new(&test.db)
        .get(2112000001)
        .await?
        .unwrap();
    assert_eq!(character.corporation_id, Some(98000001));
    assert!(character.last_update.is_some());

    let alt = CharacterRepository::new(&test.db)
        .get(2112000002)
        .await?
        .unwrap();
    assert!(alt.corporation_id.is_none());

    let corporation = CorporationRepository::new(&test.db)
        .get(98000001)
        .await?
        .unwrap();
    assert!(corporation.name.is_empty());
    assert!(corporation.last_update.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect an existing corporation to be kept as is
#[tokio::test]
async fn keeps_known_corporation() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .with_character_affiliation_endpoint(
            vec![factory::mock_affiliation(2112000001, 98000001, None)],
            1,
        )
        .build()
        .await?;
    let known = test.eve().insert_corporation(98000001, None).await?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 2112000001, "Main", true)
        .await?;

    EsiDataService::new(&test.db, &test.esi_client)
        .update_character_affiliations(vec![2112000001])
        .await?;

    let corporation = CorporationRepository::new(&test.db)
        .get(98000001)
        .await?
        .unwrap();
    assert_eq!(corporation, known);

    Ok(())
}
