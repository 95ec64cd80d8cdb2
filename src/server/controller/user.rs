use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::player::PlayerStatus;
use tower_sessions::Session;

use crate::{
    model::player::{CharacterDto, PlayerDto},
    server::{
        data::account::{character::CharacterRepository, role::RoleRepository},
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::auth::user_auth::UserAuth,
    },
};

/// Get the logged in account with its characters and roles
///
/// # Responses
/// - 200 (OK): [`PlayerDto`] of the logged in user
/// - 404 (Not Found): No user in the session, or the session character no longer exists
/// - 500 (Internal Server Error): Database error
pub async fn get_player(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let mut user_auth = UserAuth::new(&state.db, &state.esi_client, &session);

    let Some(user) = user_auth.get_user().await? else {
        return Err(AuthError::UserNotInSession.into());
    };
    let player = user.player.clone();

    let characters = CharacterRepository::new(&state.db)
        .get_many_by_player(player.id)
        .await?
        .into_iter()
        .map(|character| CharacterDto {
            id: character.id,
            name: character.name,
            main: character.main,
            valid_token: character.valid_token,
            corporation_id: character.corporation_id,
        })
        .collect();

    let roles = RoleRepository::new(&state.db)
        .get_names_by_player(player.id)
        .await?;

    let status = match player.status {
        PlayerStatus::Standard => "standard",
        PlayerStatus::Managed => "managed",
    };

    Ok((
        StatusCode::OK,
        Json(PlayerDto {
            id: player.id,
            name: player.name,
            status: status.to_string(),
            roles,
            characters,
        }),
    ))
}
