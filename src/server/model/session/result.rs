//! Outcome of the last SSO callback, read once by the frontend.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::{auth::AuthError, Error};

pub const SESSION_AUTH_RESULT_KEY: &str = "neucore:auth:result";

#[derive(Default, Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionAuthResult {
    pub success: bool,
    pub message: String,
}

impl SessionAuthResult {
    /// Store the result of a login or alt-add attempt.
    pub async fn insert(session: &Session, success: bool, message: &str) -> Result<(), Error> {
        session
            .insert(
                SESSION_AUTH_RESULT_KEY,
                SessionAuthResult {
                    success,
                    message: message.to_string(),
                },
            )
            .await?;

        Ok(())
    }

    /// Take the stored result out of the session.
    ///
    /// # Returns
    /// - `Ok(SessionAuthResult)` - Result of the last callback
    /// - `Err(Error::AuthError(AuthError::LoginResultNotInSession))` - No callback since the
    ///   result was last read
    pub async fn remove(session: &Session) -> Result<Self, Error> {
        match session
            .remove::<SessionAuthResult>(SESSION_AUTH_RESULT_KEY)
            .await?
        {
            Some(result) => Ok(result),
            None => Err(AuthError::LoginResultNotInSession.into()),
        }
    }
}
