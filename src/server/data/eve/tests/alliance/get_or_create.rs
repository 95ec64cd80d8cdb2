use super::*;

/// Expect a placeholder for an unknown alliance and the same row on the second call
#[tokio::test]
async fn creates_placeholder_once() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;
    let alliance_repo = AllianceRepository::new(&test.db);

    let first = alliance_repo.get_or_create(99000001).await?;
    let second = alliance_repo.get_or_create(99000001).await?;

    assert!(first.name.is_empty());
    assert!(first.last_update.is_none());
    assert_eq!(first, second);
    assert_eq!(alliance_repo.get_ids(0, 1000).await?, vec![99000001]);

    Ok(())
}
