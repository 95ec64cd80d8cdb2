use axum::{body::to_bytes, extract::State, http::StatusCode, response::IntoResponse};
use neucore::{
    model::player::PlayerDto,
    server::{controller::user::get_player, model::session::character::SessionCharacterId},
};

use super::*;

#[tokio::test]
/// Expect the account of the session character with all characters and roles
async fn returns_logged_in_player() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let role = test.account().insert_role("user").await?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;
    test.account()
        .insert_character(player.id, 2, "Alt", false)
        .await?;
    test.account().insert_player_role(player.id, role.id).await?;
    SessionCharacterId::insert(&test.session, 2).await.unwrap();

    let resp = get_player(State(test.app_state()), test.session)
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: PlayerDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.id, player.id);
    assert_eq!(dto.name, "Main");
    assert_eq!(dto.status, "standard");
    assert_eq!(dto.roles, vec!["user".to_string()]);
    assert_eq!(dto.characters.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect a 404 for anonymous sessions
async fn not_found_without_session() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let resp = get_player(State(test.app_state()), test.session)
        .await
        .err()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect a 404 when the session character was deleted
async fn not_found_for_deleted_character() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    SessionCharacterId::insert(&test.session, 1).await.unwrap();

    let resp = get_player(State(test.app_state()), test.session)
        .await
        .err()
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
