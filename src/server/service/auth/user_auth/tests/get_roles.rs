//! Tests for UserAuth::get_roles.

use super::*;

/// Expect the anonymous role without user
#[tokio::test]
async fn anonymous_without_user() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let roles = UserAuth::new(&test.db, &test.esi_client, &test.session)
        .get_roles()
        .await?;

    assert_eq!(roles, vec!["anonymous".to_string()]);

    Ok(())
}

/// Expect the anonymous role for a user without roles
#[tokio::test]
async fn anonymous_without_roles() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;
    SessionCharacterId::insert(&test.session, 1).await?;

    let roles = UserAuth::new(&test.db, &test.esi_client, &test.session)
        .get_roles()
        .await?;

    assert_eq!(roles, vec!["anonymous".to_string()]);

    Ok(())
}

/// Expect the role names of the account
#[tokio::test]
async fn account_roles() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;
    let user = test.account().insert_role("user").await?;
    let admin = test.account().insert_role("group-admin").await?;
    test.account().insert_player_role(player.id, user.id).await?;
    test.account().insert_player_role(player.id, admin.id).await?;
    SessionCharacterId::insert(&test.session, 1).await?;

    let roles = UserAuth::new(&test.db, &test.esi_client, &test.session)
        .get_roles()
        .await?;

    assert_eq!(roles, vec!["group-admin".to_string(), "user".to_string()]);

    Ok(())
}
