use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::api::LoginResultDto,
    server::{
        controller::util::csrf::validate_csrf,
        error::Error,
        model::{
            app::AppState,
            session::{
                auth::SessionAuthCsrf, character::SessionCharacterId, result::SessionAuthResult,
            },
        },
        service::auth::{callback::callback_service, login::login_service, user_auth::UserAuth},
    },
};

/// Message stored when the SSO code exchange or JWT validation fails
const SSO_FAILED_MESSAGE: &str = "Failed to verify the EVE login, please try again.";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with EVE Online
///
/// Creates a URL to login with EVE Online requesting the configured ESI scopes and redirects the
/// user to that URL to begin the login process.
///
/// # Responses
/// - 307 (Temporary Redirect): Redirects user to the EVE SSO login page
/// - 500 (Internal Server Error): The ESI client is not configured for OAuth2 or the session failed
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.esi_client, state.login_scopes.clone())?;

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the user is redirected to after logging in at EVE Online's website
///
/// Logs the character in, or adds it to the account of the logged in user. The result is
/// stored in the session for [`result`].
///
/// # Responses
/// - 307 (Temporary Redirect): Login attempt finished, successful or not, redirect to `/`
/// - 400 (Bad Request): CSRF state mismatch with the state stored in the session
/// - 500 (Internal Server Error): No login was started in this session or the session failed
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, &params.0.state).await?;

    let eve_auth = match callback_service(&state.esi_client, &params.0.code).await {
        Ok(eve_auth) => eve_auth,
        Err(err) => {
            tracing::error!("SSO callback failed: {}", err);
            SessionAuthResult::insert(&session, false, SSO_FAILED_MESSAGE).await?;

            return Ok(Redirect::temporary("/"));
        }
    };

    let result = UserAuth::new(&state.db, &state.esi_client, &session)
        .login(&eve_auth)
        .await;

    SessionAuthResult::insert(&session, result.is_success(), result.message()).await?;

    Ok(Redirect::temporary("/"))
}

/// Result of the last login attempt, can only be read once
///
/// # Responses
/// - 200 (OK): [`LoginResultDto`] of the last callback
/// - 404 (Not Found): No login attempt since the result was last read
pub async fn result(session: Session) -> Result<impl IntoResponse, Error> {
    let result = SessionAuthResult::remove(&session).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResultDto {
            success: result.success,
            message: result.message,
        }),
    ))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out, redirect to the login route
/// - 500 (Internal Server Error): The session could not be read
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored fails, only clear sessions with a user
    if SessionCharacterId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/auth/login"))
}
