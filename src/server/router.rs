//! HTTP routing.

use axum::{routing::get, Router};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints.
///
/// # Registered Endpoints
/// - `GET /api/auth/login` - Initiate EVE Online SSO authentication
/// - `GET /api/auth/callback` - SSO callback handler
/// - `GET /api/auth/result` - Result of the last login attempt
/// - `GET /api/auth/logout` - Logout current user
/// - `GET /api/user/player` - Logged in account with characters and roles
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(controller::auth::login))
        .route("/api/auth/callback", get(controller::auth::callback))
        .route("/api/auth/result", get(controller::auth::result))
        .route("/api/auth/logout", get(controller::auth::logout))
        .route("/api/user/player", get(controller::user::get_player))
}
