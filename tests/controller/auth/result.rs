use axum::{http::StatusCode, response::IntoResponse};
use neucore::server::{controller::auth::result, model::session::result::SessionAuthResult};

use super::*;

#[tokio::test]
/// Expect the stored result once, then a 404
async fn returns_result_once() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionAuthResult::insert(&test.session, true, "Login successful.")
        .await
        .unwrap();

    let resp = result(test.session.clone()).await.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = result(test.session).await.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
