use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Validate that the session CSRF state exists and matches `csrf_state`.
///
/// The stored state is removed in any case so every login URL can only be used once.
///
/// # Returns
/// - `Ok(())` - The states match
/// - `Err(Error::AuthError(AuthError::CsrfValidationFailed))` - The states differ
/// - `Err(Error::AuthError(AuthError::CsrfMissingValue))` - No login was started in this session
pub async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), Error> {
    let stored_state = SessionAuthCsrf::remove(session).await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(Error::AuthError(AuthError::CsrfValidationFailed))
}
