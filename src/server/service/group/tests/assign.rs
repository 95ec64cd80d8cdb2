//! Tests for AutoGroupAssignment::assign.

use super::*;

/// Expect corporation and alliance groups to be added for a member character
#[tokio::test]
async fn adds_corporation_and_alliance_groups() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let corp_group = test.account().insert_group("corp").await?;
    let alliance_group = test.account().insert_group("alliance").await?;
    test.eve().insert_corporation(98000001, Some(99000001)).await?;
    test.eve()
        .insert_corporation_group(98000001, corp_group.id)
        .await?;
    test.eve()
        .insert_alliance_group(99000001, alliance_group.id)
        .await?;

    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 2112000001, "Main", true)
        .await?;
    CharacterRepository::new(&test.db)
        .set_corporation(2112000001, Some(98000001))
        .await?;

    AutoGroupAssignment::new().assign(&test.db, &player).await?;

    let groups = GroupRepository::new(&test.db)
        .get_player_group_ids(player.id)
        .await?;
    let mut expected = vec![corp_group.id, alliance_group.id];
    expected.sort_unstable();
    assert_eq!(groups, expected);

    let player = PlayerRepository::new(&test.db).get(player.id).await?.unwrap();
    assert!(player.last_update.is_some());

    Ok(())
}

/// Expect automatic groups no longer implied to be removed along with their applications
#[tokio::test]
async fn removes_stale_auto_groups_and_applications() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let corp_group = test.account().insert_group("corp").await?;
    test.eve().insert_corporation(98000001, None).await?;
    test.eve()
        .insert_corporation_group(98000001, corp_group.id)
        .await?;

    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 2112000001, "Main", true)
        .await?;
    test.account()
        .insert_player_group(player.id, corp_group.id)
        .await?;
    test.account()
        .insert_group_application(player.id, corp_group.id)
        .await?;

    AutoGroupAssignment::new().assign(&test.db, &player).await?;

    assert!(GroupRepository::new(&test.db)
        .get_player_group_ids(player.id)
        .await?
        .is_empty());
    assert_eq!(
        entity::prelude::GroupApplication::find()
            .count(&test.db)
            .await?,
        0
    );

    Ok(())
}

/// Expect manually assigned groups without a mapping to be kept
#[tokio::test]
async fn keeps_manual_groups() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let manual = test.account().insert_group("manual").await?;
    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_player_group(player.id, manual.id)
        .await?;

    AutoGroupAssignment::new().assign(&test.db, &player).await?;

    let groups = GroupRepository::new(&test.db)
        .get_player_group_ids(player.id)
        .await?;
    assert_eq!(groups, vec![manual.id]);

    Ok(())
}

/// Expect managed accounts to be left untouched
#[tokio::test]
async fn skips_managed_accounts() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let corp_group = test.account().insert_group("corp").await?;
    test.eve().insert_corporation(98000001, None).await?;
    test.eve()
        .insert_corporation_group(98000001, corp_group.id)
        .await?;

    let player = test
        .account()
        .insert_player_with_status("Managed", PlayerStatus::Managed)
        .await?;
    test.account()
        .insert_player_group(player.id, corp_group.id)
        .await?;

    AutoGroupAssignment::new().assign(&test.db, &player).await?;

    let groups = GroupRepository::new(&test.db)
        .get_player_group_ids(player.id)
        .await?;
    assert_eq!(groups, vec![corp_group.id]);

    let player = PlayerRepository::new(&test.db).get(player.id).await?.unwrap();
    assert!(player.last_update.is_none());

    Ok(())
}

/// Expect a second run to leave the memberships unchanged
#[tokio::test]
async fn is_idempotent() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let corp_group = test.account().insert_group("corp").await?;
    test.eve().insert_corporation(98000001, None).await?;
    test.eve()
        .insert_corporation_group(98000001, corp_group.id)
        .await?;

    let player = test.account().insert_player("Main").await?;
    test.account()
        .insert_character(player.id, 2112000001, "Main", true)
        .await?;
    CharacterRepository::new(&test.db)
        .set_corporation(2112000001, Some(98000001))
        .await?;

    let mut assignment = AutoGroupAssignment::new();
    assignment.assign(&test.db, &player).await?;
    assignment.assign(&test.db, &player).await?;

    let groups = GroupRepository::new(&test.db)
        .get_player_group_ids(player.id)
        .await?;
    assert_eq!(groups, vec![corp_group.id]);

    Ok(())
}
