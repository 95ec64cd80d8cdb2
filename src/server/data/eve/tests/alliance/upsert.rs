use super::*;

/// Expect an existing alliance to be updated with the ESI data
#[tokio::test]
async fn updates_existing_alliance() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    test.eve().insert_alliance(99000001).await?;
    let alliance = factory::mock_alliance();

    let stored = AllianceRepository::new(&test.db)
        .upsert(99000001, &alliance)
        .await?;

    assert_eq!(stored.id, 99000001);
    assert_eq!(stored.name, alliance.name);
    assert_eq!(stored.ticker, alliance.ticker);

    Ok(())
}
