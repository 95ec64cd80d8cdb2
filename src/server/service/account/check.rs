//! Periodic token validation of a single character.

use entity::removed_character::RemovedCharacterReason;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::account::character::CharacterRepository,
    error::Error,
    model::{
        auth::{EveAuthentication, TokenBundle},
        db::CharacterModel,
    },
    service::{
        account::AccountService,
        auth::token::{TokenRefresh, TokenRefresher},
    },
    util::eve::BIOMASS_CORPORATION_ID,
};

/// Result of [`CharacterCheck::check_character`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckResult {
    TokenOk,
    /// The grant was revoked or the token carries no scopes
    TokenNok,
    /// The character was biomassed or changed owner and was removed
    CharacterDeleted,
    /// The refresh failed for another reason or the JWT could not be validated
    TokenParseError,
    /// No refresh token is stored
    TokenNotApplicable,
}

impl CheckResult {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TokenOk => "token OK",
            Self::TokenNok => "token NOK",
            Self::CharacterDeleted => "character deleted",
            Self::TokenParseError => "token parse error",
            Self::TokenNotApplicable => "token N/A",
        }
    }
}

pub struct CharacterCheck<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
    token_refresher: &'a TokenRefresher,
}

impl<'a> CharacterCheck<'a> {
    /// Creates a new instance of [`CharacterCheck`]
    pub fn new(
        db: &'a DatabaseConnection,
        esi_client: &'a eve_esi::Client,
        token_refresher: &'a TokenRefresher,
    ) -> Self {
        Self {
            db,
            esi_client,
            token_refresher,
        }
    }

    /// Revalidate the token of a character and remove characters that are gone.
    ///
    /// # Behavior
    /// - Characters in the biomass corporation are deleted without touching the token
    /// - Without a refresh token the token validity becomes unknown
    /// - A revoked grant marks the token invalid and clears the access token, the refresh
    ///   token is kept
    /// - Any other refresh or JWT validation failure leaves the character untouched
    /// - A validated token is stored, valid if it carries scopes, unknown otherwise
    /// - A changed owner hash deletes the character
    /// - A JWT without owner hash is logged, only the owner comparison is skipped
    ///
    /// Network calls happen before the writes of a character, which are committed together.
    ///
    /// # Returns
    /// - `Ok(CheckResult)` - Outcome of the check
    /// - `Err(Error::DbErr)` - Writing the outcome failed, nothing was committed
    pub async fn check_character(&self, character: CharacterModel) -> Result<CheckResult, Error> {
        if character.corporation_id == Some(BIOMASS_CORPORATION_ID) {
            let txn = self.db.begin().await?;
            AccountService::new(&txn)
                .delete_character(character, RemovedCharacterReason::DeletedBiomassed, None)
                .await?;
            txn.commit().await?;

            return Ok(CheckResult::CharacterDeleted);
        }

        let Some(token) = TokenBundle::from_character(&character) else {
            CharacterRepository::new(self.db)
                .set_valid_token(character, None)
                .await?;

            return Ok(CheckResult::TokenNotApplicable);
        };

        let token = match self.token_refresher.refresh(token).await {
            TokenRefresh::Current(token) | TokenRefresh::Refreshed(token) => token,
            TokenRefresh::InvalidGrant => {
                let txn = self.db.begin().await?;
                let character_repo = CharacterRepository::new(&txn);
                let character = character_repo.set_valid_token(character, Some(false)).await?;
                character_repo.clear_access_token(character).await?;
                txn.commit().await?;

                return Ok(CheckResult::TokenNok);
            }
            TokenRefresh::Transient { .. } => return Ok(CheckResult::TokenParseError),
        };

        let eve_auth = match self.validate(token).await {
            Ok(eve_auth) => eve_auth,
            Err(err) => {
                tracing::error!(
                    character_id = %character.id,
                    error = %err,
                    "Failed to validate access token"
                );

                return Ok(CheckResult::TokenParseError);
            }
        };

        let txn = self.db.begin().await?;

        let character_repo = CharacterRepository::new(&txn);
        let (character, mut result) = if eve_auth.scopes.is_empty() {
            let character = character_repo.set_valid_token(character, None).await?;

            (character, CheckResult::TokenNok)
        } else {
            let character = character_repo
                .store_tokens(character, &eve_auth.token, Some(true))
                .await?;

            (character, CheckResult::TokenOk)
        };

        if eve_auth.character_owner_hash.is_empty() {
            tracing::error!(
                character_id = %character.id,
                "Unexpected JWT data, missing character owner hash."
            );
        } else if character.character_owner_hash.as_deref()
            != Some(eve_auth.character_owner_hash.as_str())
        {
            AccountService::new(&txn)
                .delete_character(character, RemovedCharacterReason::DeletedOwnerChanged, None)
                .await?;

            result = CheckResult::CharacterDeleted;
        }

        txn.commit().await?;

        Ok(result)
    }

    async fn validate(&self, token: TokenBundle) -> Result<EveAuthentication, Error> {
        let claims = self
            .esi_client
            .oauth2()
            .validate_token(token.access_token.clone())
            .await?;

        EveAuthentication::from_claims(claims, token)
    }
}
