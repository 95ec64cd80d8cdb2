//! Resolves the logged in user of a request and logs characters in.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tower_sessions::Session;

use crate::server::{
    data::account::{
        character::CharacterRepository,
        role::{RoleRepository, ROLE_ANONYMOUS, ROLE_USER},
    },
    error::{account::AccountError, Error},
    model::{
        auth::EveAuthentication,
        db::{CharacterModel, PlayerModel},
        session::character::SessionCharacterId,
    },
    service::{account::AccountService, eve::EsiDataService, group::AutoGroupAssignment},
};

/// The logged in character and its account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub character: CharacterModel,
    pub player: PlayerModel,
}

/// Outcome of [`UserAuth::login`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginResult {
    /// Logged in, with a new, moved or existing account
    AuthenticatedSuccess,
    AuthenticatedFail,
    /// The character was added to the account of the logged in user
    CharacterAddedSuccess,
    CharacterAddedFail,
}

impl LoginResult {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::AuthenticatedSuccess | Self::CharacterAddedSuccess
        )
    }

    /// Message shown to the user after the SSO redirect
    pub fn message(&self) -> &'static str {
        match self {
            Self::AuthenticatedSuccess => "Login successful.",
            Self::AuthenticatedFail => "Failed to authenticate user.",
            Self::CharacterAddedSuccess => "Character added to player account.",
            Self::CharacterAddedFail => "Failed to add alt to account.",
        }
    }
}

/// Per request authentication state.
///
/// The user is resolved from the session on first use and cached for the rest of the
/// request.
pub struct UserAuth<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
    session: &'a Session,
    user: Option<AuthenticatedUser>,
}

impl<'a> UserAuth<'a> {
    /// Creates a new instance of [`UserAuth`]
    pub fn new(
        db: &'a DatabaseConnection,
        esi_client: &'a eve_esi::Client,
        session: &'a Session,
    ) -> Self {
        Self {
            db,
            esi_client,
            session,
            user: None,
        }
    }

    /// Get the logged in user
    ///
    /// # Returns
    /// - `Ok(Some(AuthenticatedUser))` - The character in the session exists
    /// - `Ok(None)` - No character in the session, the session could not be read or the
    ///   character no longer exists
    /// - `Err(Error::DbErr)` - Database error while loading the character
    pub async fn get_user(&mut self) -> Result<Option<&AuthenticatedUser>, Error> {
        if self.user.is_none() {
            self.user = self.load_user().await?;
        }

        Ok(self.user.as_ref())
    }

    /// Role names of the logged in user, `["anonymous"]` without user or roles
    pub async fn get_roles(&mut self) -> Result<Vec<String>, Error> {
        let player_id = self.get_user().await?.map(|user| user.player.id);

        let mut roles = match player_id {
            Some(player_id) => {
                RoleRepository::new(self.db)
                    .get_names_by_player(player_id)
                    .await?
            }
            None => Vec::new(),
        };

        if roles.is_empty() {
            roles.push(ROLE_ANONYMOUS.to_string());
        }

        Ok(roles)
    }

    /// Log in with the character of a successful SSO login
    ///
    /// Without a logged in user the character is authenticated, otherwise it is added to
    /// the logged in user's account as an alt.
    pub async fn login(&mut self, eve_auth: &EveAuthentication) -> LoginResult {
        let logged_in = match self.get_user().await {
            Ok(user) => user.cloned(),
            Err(err) => {
                tracing::error!("Failed to load user before login: {}", err);
                return LoginResult::AuthenticatedFail;
            }
        };

        match logged_in {
            None => match self.authenticate(eve_auth).await {
                Ok(()) => LoginResult::AuthenticatedSuccess,
                Err(err) => {
                    tracing::error!(
                        character_id = %eve_auth.character_id,
                        "UserAuth::authenticate(): {}",
                        err
                    );
                    LoginResult::AuthenticatedFail
                }
            },
            Some(user) => match self.add_alt(eve_auth, user.player.id).await {
                Ok(()) => LoginResult::CharacterAddedSuccess,
                Err(err) => {
                    tracing::error!(
                        character_id = %eve_auth.character_id,
                        player_id = %user.player.id,
                        "UserAuth::add_alt(): {}",
                        err
                    );
                    LoginResult::CharacterAddedFail
                }
            },
        }
    }

    async fn load_user(&self) -> Result<Option<AuthenticatedUser>, Error> {
        let character_id = match SessionCharacterId::get(self.session).await {
            Ok(Some(character_id)) => character_id,
            Ok(None) => return Ok(None),
            Err(err) => {
                tracing::debug!("No user, failed to read session: {}", err);
                return Ok(None);
            }
        };

        let user = CharacterRepository::new(self.db)
            .get_with_player(character_id)
            .await?
            .and_then(|(character, player)| {
                player.map(|player| AuthenticatedUser { character, player })
            });

        Ok(user)
    }

    /// First login, login after an owner change or login with a known character.
    ///
    /// Fails only while the account is changed. Once the transaction is committed a failure
    /// to write the session is logged and the login still counts as successful.
    async fn authenticate(&mut self, eve_auth: &EveAuthentication) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let account_service = AccountService::new(&txn);

        let existing = CharacterRepository::new(&txn)
            .get(eve_auth.character_id)
            .await?;

        let mut old_player_id = None;
        let character = match existing {
            Some(character)
                if character.character_owner_hash.as_deref()
                    == Some(eve_auth.character_owner_hash.as_str()) =>
            {
                character
            }
            existing => {
                let Some(user_role) = RoleRepository::new(&txn).find_by_name(ROLE_USER).await?
                else {
                    tracing::error!("UserAuth::authenticate(): Role \"{}\" not found.", ROLE_USER);
                    return Err(AccountError::RoleNotFound(ROLE_USER.to_string()).into());
                };

                let (player, character) = match existing {
                    None => {
                        account_service
                            .create_new_player_with_main(
                                eve_auth.character_id,
                                &eve_auth.character_name,
                            )
                            .await?
                    }
                    Some(character) => {
                        old_player_id = Some(character.player_id);
                        account_service
                            .move_character_to_new_account(character)
                            .await?
                    }
                };

                RoleRepository::new(&txn)
                    .add_to_player(player.id, user_role.id)
                    .await?;

                character
            }
        };

        let character = account_service
            .update_and_store_character(character, eve_auth)
            .await?;
        account_service
            .reset_deactivation_mail_sent(character.player_id)
            .await?;

        txn.commit().await?;

        self.after_login(&character, old_player_id).await;

        // The account is already committed
        if let Err(err) = SessionCharacterId::insert(self.session, character.id).await {
            tracing::error!(
                character_id = %character.id,
                "Failed to store the logged in character in the session: {}",
                err
            );
        }
        self.user = None;

        Ok(())
    }

    /// Add a character to the account of the logged in user.
    ///
    /// Characters of other accounts are moved, the move is recorded on the old account.
    async fn add_alt(&mut self, eve_auth: &EveAuthentication, player_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let account_service = AccountService::new(&txn);

        let existing = CharacterRepository::new(&txn)
            .get(eve_auth.character_id)
            .await?;

        let mut old_player_id = None;
        let character = match existing {
            None => {
                CharacterRepository::new(&txn)
                    .create(
                        player_id,
                        eve_auth.character_id,
                        &eve_auth.character_name,
                        false,
                    )
                    .await?
            }
            Some(character) if character.player_id == player_id => character,
            Some(character) => {
                old_player_id = Some(character.player_id);
                account_service
                    .move_character(character, player_id, false)
                    .await?
            }
        };

        let character = account_service
            .update_and_store_character(character, eve_auth)
            .await?;
        account_service.reset_deactivation_mail_sent(player_id).await?;

        txn.commit().await?;

        self.after_login(&character, old_player_id).await;
        self.user = None;

        Ok(())
    }

    /// Fetch a missing corporation and update the groups of the affected accounts.
    ///
    /// The login itself already succeeded, failures are only logged.
    async fn after_login(&self, character: &CharacterModel, old_player_id: Option<i32>) {
        if character.corporation_id.is_none() {
            if let Err(err) = EsiDataService::new(self.db, self.esi_client)
                .fetch_character_with_corporation_and_alliance(character.id)
                .await
            {
                tracing::warn!(
                    character_id = %character.id,
                    "Failed to fetch corporation after login: {}",
                    err
                );
            }
        }

        let mut group_assignment = AutoGroupAssignment::new();
        for player_id in std::iter::once(character.player_id).chain(old_player_id) {
            if let Err(err) = group_assignment
                .update_groups_in_transaction(self.db, player_id)
                .await
            {
                tracing::error!(
                    player_id = %player_id,
                    "Failed to update groups after login: {}",
                    err
                );
            }
        }
    }
}

#[cfg(test)]
mod tests;
