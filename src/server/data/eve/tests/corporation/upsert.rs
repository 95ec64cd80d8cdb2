//! Tests for CorporationRepository::upsert.

use super::*;

/// Expect a placeholder to be filled with the ESI data
#[tokio::test]
async fn fills_placeholder() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    test.eve().insert_corporation_placeholder(98000001).await?;
    test.eve().insert_alliance(99000001).await?;
    let corporation = factory::mock_corporation(Some(99000001));

    let stored = CorporationRepository::new(&test.db)
        .upsert(98000001, &corporation)
        .await?;

    assert_eq!(stored.name, corporation.name);
    assert_eq!(stored.ticker, corporation.ticker);
    assert_eq!(stored.alliance_id, Some(99000001));
    assert!(stored.last_update.is_some());

    Ok(())
}

/// Expect leaving an alliance to clear the alliance reference
#[tokio::test]
async fn clears_alliance() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    test.eve().insert_corporation(98000001, Some(99000001)).await?;

    let stored = CorporationRepository::new(&test.db)
        .upsert(98000001, &factory::mock_corporation(None))
        .await?;

    assert!(stored.alliance_id.is_none());

    Ok(())
}

/// Expect Error when the alliance is unknown
#[tokio::test]
async fn fails_for_unknown_alliance() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let result = CorporationRepository::new(&test.db)
        .upsert(98000001, &factory::mock_corporation(Some(99000001)))
        .await;

    assert!(result.is_err());

    Ok(())
}
