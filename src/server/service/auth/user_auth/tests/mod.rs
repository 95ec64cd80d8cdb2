mod get_roles;
mod login;

use chrono::Utc;
use neucore_test_utils::prelude::*;

use crate::server::{
    data::account::{character::CharacterRepository, player::PlayerRepository},
    model::{
        auth::{EveAuthentication, TokenBundle},
        session::character::SessionCharacterId,
    },
    service::auth::user_auth::{LoginResult, UserAuth},
};

/// Character IDs below the valid ranges never reach ESI after login
fn eve_auth(character_id: i64, name: &str, owner_hash: &str) -> EveAuthentication {
    EveAuthentication {
        character_id,
        character_name: name.to_string(),
        character_owner_hash: owner_hash.to_string(),
        scopes: vec!["publicData".to_string()],
        token: TokenBundle {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires: Some(Utc::now().timestamp() + 1200),
        },
    }
}
