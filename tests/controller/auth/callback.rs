use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use neucore::server::{
    controller::auth::{callback, CallbackParams},
    data::account::character::CharacterRepository,
    model::session::{
        auth::SessionAuthCsrf, character::SessionCharacterId, result::SessionAuthResult,
    },
};

use super::*;

const STATE: &str = "state";

fn params(state: &str) -> Query<CallbackParams> {
    Query(CallbackParams {
        state: state.to_string(),
        code: "code".to_string(),
    })
}

#[tokio::test]
/// Expect a successful callback to create the account and log the character in
async fn logs_in_new_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .with_jwt_endpoints(1, TEST_OWNER_HASH)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, STATE).await.unwrap();

    let resp = callback(State(test.app_state()), test.session.clone(), params(STATE))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/");
    test.assert_mocks();

    let character = CharacterRepository::new(&test.db).get(1).await?.unwrap();
    assert_eq!(character.name, TEST_CHARACTER_NAME);
    assert_eq!(character.refresh_token.as_deref(), Some(TEST_REFRESH_TOKEN));
    assert_eq!(SessionCharacterId::get(&test.session).await.unwrap(), Some(1));

    let result = SessionAuthResult::remove(&test.session).await.unwrap();
    assert!(result.success);
    assert_eq!(result.message, "Login successful.");

    Ok(())
}

#[tokio::test]
/// Expect a logged in user to get the character added as alt
async fn adds_alt_to_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .with_jwt_endpoints(2, TEST_OWNER_HASH)
        .build()
        .await?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;
    SessionCharacterId::insert(&test.session, 1).await.unwrap();
    SessionAuthCsrf::insert(&test.session, STATE).await.unwrap();

    callback(State(test.app_state()), test.session.clone(), params(STATE))
        .await
        .unwrap();

    let alt = CharacterRepository::new(&test.db).get(2).await?.unwrap();
    assert_eq!(alt.player_id, player.id);
    assert!(!alt.main);
    assert_eq!(SessionCharacterId::get(&test.session).await.unwrap(), Some(1));

    let result = SessionAuthResult::remove(&test.session).await.unwrap();
    assert!(result.success);
    assert_eq!(result.message, "Character added to player account.");

    Ok(())
}

#[tokio::test]
/// Expect a 400 and no login when the state does not match the session
async fn rejects_csrf_mismatch() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    SessionAuthCsrf::insert(&test.session, STATE).await.unwrap();

    let result = callback(State(test.app_state()), test.session.clone(), params("other")).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SessionAuthResult::remove(&test.session).await.is_err());

    Ok(())
}

#[tokio::test]
/// Expect a failed code exchange to store a failure result and redirect
async fn stores_failure_when_sso_fails() -> Result<(), TestError> {
    // No token endpoint is mocked, the code exchange gets an error status
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, STATE).await.unwrap();

    let resp = callback(State(test.app_state()), test.session.clone(), params(STATE))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(SessionCharacterId::get(&test.session).await.unwrap().is_none());

    let result = SessionAuthResult::remove(&test.session).await.unwrap();
    assert!(!result.success);
    assert_eq!(
        result.message,
        "Failed to verify the EVE login, please try again."
    );

    Ok(())
}

#[tokio::test]
/// Expect a failure result when the user role does not exist
async fn stores_failure_without_user_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_jwt_endpoints(1, TEST_OWNER_HASH)
        .build()
        .await?;
    SessionAuthCsrf::insert(&test.session, STATE).await.unwrap();

    callback(State(test.app_state()), test.session.clone(), params(STATE))
        .await
        .unwrap();

    assert!(CharacterRepository::new(&test.db).get(1).await?.is_none());
    let result = SessionAuthResult::remove(&test.session).await.unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Failed to authenticate user.");

    Ok(())
}
