//! Tests for CorporationRepository::get_or_create.

use super::*;

/// Expect a placeholder without name or last update for an unknown corporation
#[tokio::test]
async fn creates_placeholder() -> Result<(), TestError> {
    let test = test_setup_with_account_tables!()?;

    let corporation = CorporationRepository::new(&test.db)
        .get_or_create(98000001)
        .await?;

    assert_eq!(corporation.id, 98000001);
    assert!(corporation.name.is_empty());
    assert!(corporation.last_update.is_none());

    Ok(())
}

/// Expect an existing corporation to be returned unchanged
#[tokio::test]
async fn returns_existing_corporation() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    let existing = test.eve().insert_corporation(98000001, Some(99000001)).await?;

    let corporation = CorporationRepository::new(&test.db)
        .get_or_create(98000001)
        .await?;

    assert_eq!(corporation, existing);

    Ok(())
}
