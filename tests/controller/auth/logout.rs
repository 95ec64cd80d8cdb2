use axum::{http::StatusCode, response::IntoResponse};
use neucore::server::{controller::auth::logout, model::session::character::SessionCharacterId};

use super::*;

#[tokio::test]
/// Expect a redirect to login and a cleared session
async fn clears_session_with_character() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionCharacterId::insert(&test.session, 1).await.unwrap();

    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()["location"], "/api/auth/login");
    assert!(SessionCharacterId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect a redirect even if the session holds no character
async fn redirects_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
