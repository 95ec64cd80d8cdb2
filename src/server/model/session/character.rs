use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

/// Session key holding the ID of the logged in character.
pub const SESSION_CHARACTER_ID_KEY: &str = "neucore:auth:character_id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCharacterId(pub String);

impl SessionCharacterId {
    /// Insert the ID of the character that logged in
    pub async fn insert(session: &Session, character_id: i64) -> Result<(), Error> {
        session
            .insert(
                SESSION_CHARACTER_ID_KEY,
                SessionCharacterId(character_id.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get the ID of the logged in character, `None` for anonymous sessions
    pub async fn get(session: &Session) -> Result<Option<i64>, Error> {
        session
            .get::<SessionCharacterId>(SESSION_CHARACTER_ID_KEY)
            .await?
            .map(|SessionCharacterId(id)| {
                id.parse::<i64>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session character id: {}", e))
                })
            })
            .transpose()
    }
}
