//! Tests for CorporationRepository::get_ids_by_last_update.

use super::*;

/// Expect placeholders before fetched corporations
#[tokio::test]
async fn placeholders_first() -> Result<(), TestError> {
    let mut test = test_setup_with_account_tables!()?;
    test.eve().insert_corporation(98000001, None).await?;
    test.eve().insert_corporation_placeholder(98000002).await?;

    let ids = CorporationRepository::new(&test.db)
        .get_ids_by_last_update(0, 1000)
        .await?;

    assert_eq!(ids, vec![98000002, 98000001]);

    Ok(())
}
