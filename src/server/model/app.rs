use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenRefresher;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub esi_client: eve_esi::Client,
    pub token_refresher: TokenRefresher,
    /// ESI scopes requested by the login route
    pub login_scopes: Vec<String>,
}

impl AppState {
    /// Set the ESI scopes requested on login, none are requested by default
    pub fn with_login_scopes(mut self, login_scopes: Vec<String>) -> Self {
        self.login_scopes = login_scopes;
        self
    }
}

impl From<(DatabaseConnection, eve_esi::Client, TokenRefresher)> for AppState {
    fn from(
        (db, esi_client, token_refresher): (DatabaseConnection, eve_esi::Client, TokenRefresher),
    ) -> Self {
        Self {
            db,
            esi_client,
            token_refresher,
            login_scopes: Vec::new(),
        }
    }
}
