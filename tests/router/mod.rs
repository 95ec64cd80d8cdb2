//! Requests sent through the full router with a session layer.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use neucore::server::router;
use neucore_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::TestContextExt;

fn app(test: &TestContext) -> Router {
    let session = SessionManagerLayer::new(MemoryStore::default());

    router::routes()
        .with_state(test.app_state())
        .layer(session)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
/// Expect the login route to redirect and set a session cookie
async fn login_sets_session_cookie() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = app(&test).oneshot(get("/api/auth/login")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert!(resp.headers().contains_key("set-cookie"));

    Ok(())
}

#[tokio::test]
/// Expect anonymous requests for the player to be 404
async fn player_requires_login() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = app(&test).oneshot(get("/api/user/player")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a callback without a started login to fail
async fn callback_without_login_fails() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = app(&test)
        .oneshot(get("/api/auth/callback?state=state&code=code"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
