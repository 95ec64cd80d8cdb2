use axum::{extract::State, http::StatusCode, response::IntoResponse};
use neucore::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};

use super::*;

#[tokio::test]
/// Expect a 307 redirect to EVE SSO with the CSRF state stored in the session
async fn redirects_to_eve_login() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = login(State(test.app_state()), test.session.clone())
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers()["location"].to_str().unwrap();
    let state = SessionAuthCsrf::get(&test.session).await.unwrap();
    assert!(location.contains(&state));

    Ok(())
}

#[tokio::test]
/// Expect the configured ESI scopes to be requested from EVE SSO
async fn requests_configured_scopes() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let state = test.app_state().with_login_scopes(vec![
        "publicData".to_string(),
        "esi-mail.send_mail.v1".to_string(),
    ]);

    let resp = login(State(state), test.session)
        .await
        .unwrap()
        .into_response();

    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.contains("publicData"));
    assert!(location.contains("esi-mail.send_mail.v1"));

    Ok(())
}

#[tokio::test]
/// Expect a 500 when the ESI client has no OAuth2 credentials
async fn fails_when_oauth2_not_configured() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let mut state = test.app_state();
    state.esi_client = eve_esi::Client::new(TEST_USER_AGENT).unwrap();

    let result = login(State(state), test.session).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
