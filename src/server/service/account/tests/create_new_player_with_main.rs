//! Tests for AccountService::create_new_player_with_main.

use super::*;

/// Expect a new account named after its main character
#[tokio::test]
async fn creates_account_with_main() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let (player, character) = AccountService::new(&test.db)
        .create_new_player_with_main(555, "New Pilot")
        .await?;

    assert_eq!(player.name, "New Pilot");
    assert_eq!(character.id, 555);
    assert_eq!(character.player_id, player.id);
    assert!(character.main);

    Ok(())
}

/// Expect Error for a character ID that already exists
#[tokio::test]
async fn fails_for_existing_character() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 555, "Main", true)
        .await?;

    let result = AccountService::new(&test.db)
        .create_new_player_with_main(555, "Main")
        .await;

    assert!(result.is_err());

    Ok(())
}
