//! Tests for UserAuth::login.

use std::sync::Arc;

use entity::removed_character::RemovedCharacterReason;
use tower_sessions::{
    session::{Id, Record},
    session_store::{self, SessionStore},
    Session,
};

use super::*;
use crate::server::data::{
    account::{removed_character::RemovedCharacterRepository, role::RoleRepository},
    group::GroupRepository,
};

/// Expect a first login to create an account with the user role
#[tokio::test]
async fn first_login_creates_account() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .build()
        .await?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth
        .login(&eve_auth(1, "Main", TEST_OWNER_HASH))
        .await;

    assert_eq!(result, LoginResult::AuthenticatedSuccess);

    let (character, player) = CharacterRepository::new(&test.db)
        .get_with_player(1)
        .await?
        .unwrap();
    let player = player.unwrap();
    assert!(character.main);
    assert_eq!(character.character_owner_hash.as_deref(), Some(TEST_OWNER_HASH));
    assert_eq!(character.valid_token, Some(true));
    assert_eq!(player.name, "Main");
    assert_eq!(
        RoleRepository::new(&test.db)
            .get_names_by_player(player.id)
            .await?,
        vec!["user".to_string()]
    );
    assert_eq!(SessionCharacterId::get(&test.session).await?, Some(1));

    Ok(())
}

/// Expect a failed login without the user role and nothing stored
#[tokio::test]
async fn fails_without_user_role() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth
        .login(&eve_auth(1, "Main", TEST_OWNER_HASH))
        .await;

    assert_eq!(result, LoginResult::AuthenticatedFail);
    assert!(CharacterRepository::new(&test.db).get(1).await?.is_none());
    assert!(SessionCharacterId::get(&test.session).await?.is_none());

    Ok(())
}

/// Expect a known character with the same owner to keep its account
#[tokio::test]
async fn reuses_existing_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .build()
        .await?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth
        .login(&eve_auth(1, "Renamed", TEST_OWNER_HASH))
        .await;

    assert_eq!(result, LoginResult::AuthenticatedSuccess);
    let character = CharacterRepository::new(&test.db).get(1).await?.unwrap();
    assert_eq!(character.player_id, player.id);
    let player = PlayerRepository::new(&test.db)
        .get(player.id)
        .await?
        .unwrap();
    assert_eq!(player.name, "Renamed");

    Ok(())
}

/// Expect a changed owner to move the character to a new account
#[tokio::test]
async fn owner_change_moves_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .build()
        .await?;
    let old_player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(old_player.id, 1, "Main", true)
        .await?;
    test.account()
        .insert_character(old_player.id, 2, "Alt", false)
        .await?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth
        .login(&eve_auth(1, "Main", "new-owner-hash"))
        .await;

    assert_eq!(result, LoginResult::AuthenticatedSuccess);

    let character = CharacterRepository::new(&test.db).get(1).await?.unwrap();
    assert_ne!(character.player_id, old_player.id);
    assert!(character.main);
    assert_eq!(character.character_owner_hash.as_deref(), Some("new-owner-hash"));

    let tombstones = RemovedCharacterRepository::new(&test.db)
        .get_many_by_player(old_player.id)
        .await?;
    assert_eq!(tombstones.len(), 1);
    assert_eq!(tombstones[0].reason, RemovedCharacterReason::Moved);
    assert_eq!(tombstones[0].new_player_id, Some(character.player_id));

    let alt = CharacterRepository::new(&test.db).get(2).await?.unwrap();
    assert!(alt.main);

    Ok(())
}

/// Expect a logged in user to get a new character as alt
#[tokio::test]
async fn adds_new_alt() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;
    SessionCharacterId::insert(&test.session, 1).await?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth.login(&eve_auth(2, "Alt", "alt-owner")).await;

    assert_eq!(result, LoginResult::CharacterAddedSuccess);
    let alt = CharacterRepository::new(&test.db).get(2).await?.unwrap();
    assert_eq!(alt.player_id, player.id);
    assert!(!alt.main);
    assert_eq!(SessionCharacterId::get(&test.session).await?, Some(1));

    Ok(())
}

/// Expect a character of another account to be moved without merging the accounts
#[tokio::test]
async fn moves_alt_from_other_account() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 1, "Main", true)
        .await?;
    let other = test.account().insert_player("Other").await?;
    test.account()
        .insert_character(other.id, 2, "Other", true)
        .await?;
    test.account()
        .insert_character(other.id, 3, "Other Alt", false)
        .await?;
    SessionCharacterId::insert(&test.session, 1).await?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth
        .login(&eve_auth(2, "Other", TEST_OWNER_HASH))
        .await;

    assert_eq!(result, LoginResult::CharacterAddedSuccess);

    let moved = CharacterRepository::new(&test.db).get(2).await?.unwrap();
    assert_eq!(moved.player_id, player.id);
    assert!(!moved.main);

    let remaining = CharacterRepository::new(&test.db).get(3).await?.unwrap();
    assert_eq!(remaining.player_id, other.id);
    assert!(remaining.main);

    let tombstones = RemovedCharacterRepository::new(&test.db)
        .get_many_by_player(other.id)
        .await?;
    assert_eq!(tombstones.len(), 1);
    assert_eq!(tombstones[0].new_player_id, Some(player.id));

    Ok(())
}

/// Expect the corporation to be fetched and its groups assigned after login
#[tokio::test]
async fn fetches_corporation_and_assigns_groups() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .with_character_affiliation_endpoint(
            vec![factory::mock_affiliation(2112000001, 98000001, None)],
            1,
        )
        .with_corporation_endpoint(98000001, factory::mock_corporation(None), 1)
        .build()
        .await?;
    let group = test.account().insert_group("members").await?;
    test.eve().insert_corporation_placeholder(98000001).await?;
    test.eve()
        .insert_corporation_group(98000001, group.id)
        .await?;

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &test.session);
    let result = user_auth
        .login(&eve_auth(2112000001, "Main", TEST_OWNER_HASH))
        .await;

    assert_eq!(result, LoginResult::AuthenticatedSuccess);

    let character = CharacterRepository::new(&test.db)
        .get(2112000001)
        .await?
        .unwrap();
    assert_eq!(character.corporation_id, Some(98000001));
    assert_eq!(
        GroupRepository::new(&test.db)
            .get_player_group_ids(character.player_id)
            .await?,
        vec![group.id]
    );
    test.assert_mocks();

    Ok(())
}

/// Session store whose backend is unreachable
#[derive(Debug, Clone)]
struct UnavailableStore;

type StoreFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = session_store::Result<T>> + Send + 'a>>;

impl SessionStore for UnavailableStore {
    fn save<'a, 'b, 'c>(&'a self, _record: &'b Record) -> StoreFuture<'c, ()>
    where
        'a: 'c,
        'b: 'c,
        Self: 'c,
    {
        Box::pin(async { Err(session_store::Error::Backend("unavailable".to_string())) })
    }

    fn load<'a, 'b, 'c>(&'a self, _session_id: &'b Id) -> StoreFuture<'c, Option<Record>>
    where
        'a: 'c,
        'b: 'c,
        Self: 'c,
    {
        Box::pin(async { Err(session_store::Error::Backend("unavailable".to_string())) })
    }

    fn delete<'a, 'b, 'c>(&'a self, _session_id: &'b Id) -> StoreFuture<'c, ()>
    where
        'a: 'c,
        'b: 'c,
        Self: 'c,
    {
        Box::pin(async { Err(session_store::Error::Backend("unavailable".to_string())) })
    }
}

/// Expect a login to succeed with the account stored when the session cannot be written
#[tokio::test]
async fn keeps_account_when_session_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .with_user_role()
        .build()
        .await?;
    let session = Session::new(Some(Id::default()), Arc::new(UnavailableStore), None);

    let mut user_auth = UserAuth::new(&test.db, &test.esi_client, &session);
    let result = user_auth
        .login(&eve_auth(1, "Main", TEST_OWNER_HASH))
        .await;

    assert_eq!(result, LoginResult::AuthenticatedSuccess);
    let (character, player) = CharacterRepository::new(&test.db)
        .get_with_player(1)
        .await?
        .unwrap();
    assert_eq!(character.character_owner_hash.as_deref(), Some(TEST_OWNER_HASH));
    assert_eq!(player.unwrap().name, "Main");

    Ok(())
}
