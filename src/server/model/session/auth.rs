//! CSRF state of the EVE SSO login flow.
//!
//! The state is generated when the login redirect is built, stored here and compared
//! against the `state` query parameter of the callback. It is removed on comparison so a
//! callback URL can't be replayed.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

/// Session key for the CSRF state of the SSO login flow.
pub const SESSION_AUTH_CSRF_KEY: &str = "neucore:auth:csrf";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionAuthCsrf(pub String);

impl SessionAuthCsrf {
    /// Store the CSRF state, replacing any previous one.
    ///
    /// # Arguments
    /// - `session` - Session of the user starting the login
    /// - `state` - State returned by the ESI client when building the login URL
    pub async fn insert(session: &Session, state: &str) -> Result<(), Error> {
        session
            .insert(SESSION_AUTH_CSRF_KEY, SessionAuthCsrf(state.to_string()))
            .await?;

        Ok(())
    }

    /// Read the CSRF state without consuming it.
    ///
    /// # Returns
    /// - `Ok(String)` - Stored state
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
    pub async fn get(session: &Session) -> Result<String, Error> {
        match session.get::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY).await? {
            Some(SessionAuthCsrf(state)) => Ok(state),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }

    /// Consume the CSRF state.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - Stored state, now removed from the session
    /// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login in progress
    pub async fn remove(session: &Session) -> Result<Option<String>, Error> {
        match session
            .remove::<SessionAuthCsrf>(SESSION_AUTH_CSRF_KEY)
            .await?
        {
            Some(SessionAuthCsrf(state)) => Ok(Some(state)),
            None => Err(AuthError::CsrfMissingValue.into()),
        }
    }
}
