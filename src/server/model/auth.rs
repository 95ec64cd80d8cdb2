//! Models for data received from EVE SSO.

use chrono::Utc;
use eve_esi::model::oauth2::EveJwtClaims;
use oauth2::TokenResponse;

use crate::server::{error::Error, model::db::CharacterModel};

/// OAuth2 token set of a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp in seconds, `None` if the provider sent no lifetime
    pub expires: Option<i64>,
}

impl TokenBundle {
    /// A bundle without an expiry counts as expired.
    pub fn is_expired(&self) -> bool {
        match self.expires {
            Some(expires) => expires <= Utc::now().timestamp(),
            None => true,
        }
    }

    /// Build the bundle stored for a character.
    ///
    /// # Returns
    /// - `Some(TokenBundle)` - The character has a non-empty refresh token
    /// - `None` - Nothing to refresh, the access token alone is useless once expired
    pub fn from_character(character: &CharacterModel) -> Option<Self> {
        let refresh_token = character
            .refresh_token
            .as_deref()
            .filter(|token| !token.is_empty())?;

        Some(Self {
            access_token: character.access_token.clone().unwrap_or_default(),
            refresh_token: refresh_token.to_string(),
            expires: character.expires,
        })
    }

    /// Build a bundle from an SSO token endpoint response.
    ///
    /// The provider may omit the refresh token on refresh grants, `previous_refresh_token`
    /// is kept in that case.
    pub fn from_token_response<T: TokenResponse>(
        token: &T,
        previous_refresh_token: Option<&str>,
    ) -> Self {
        let refresh_token = token
            .refresh_token()
            .map(|token| token.secret().to_string())
            .or_else(|| previous_refresh_token.map(str::to_string))
            .unwrap_or_default();

        let expires = token
            .expires_in()
            .map(|lifetime| Utc::now().timestamp() + lifetime.as_secs() as i64);

        Self {
            access_token: token.access_token().secret().to_string(),
            refresh_token,
            expires,
        }
    }
}

/// Identity and token data of a character as verified by EVE SSO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EveAuthentication {
    pub character_id: i64,
    pub character_name: String,
    /// Empty if the provider sent no owner hash
    pub character_owner_hash: String,
    pub scopes: Vec<String>,
    pub token: TokenBundle,
}

impl EveAuthentication {
    /// Combine validated JWT claims with the token they were decoded from.
    ///
    /// # Returns
    /// - `Ok(EveAuthentication)` - Claims contain a valid character subject
    /// - `Err(Error::EsiError)` - The `sub` claim is not a character ID
    pub fn from_claims(claims: EveJwtClaims, token: TokenBundle) -> Result<Self, Error> {
        let character_id = claims.character_id()?;

        Ok(Self {
            character_id,
            character_name: claims.name,
            character_owner_hash: claims.owner,
            scopes: claims.scp,
            token,
        })
    }

    /// Scopes in the space delimited form stored on the character.
    pub fn scopes_string(&self) -> String {
        self.scopes.join(" ")
    }
}
