use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    command::{collect_ids, pause},
    data::account::character::CharacterRepository,
    error::Error,
    service::{
        account::check::{CharacterCheck, CheckResult},
        auth::token::TokenRefresher,
    },
};

pub const DEFAULT_SLEEP_MS: u64 = 50;

/// Result counts of a `check-tokens` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckTokensSummary {
    pub results: HashMap<CheckResult, usize>,
    /// Characters that vanished before they were checked
    pub not_found: usize,
    /// Characters whose check failed with a database error
    pub failed: usize,
}

impl CheckTokensSummary {
    pub fn count(&self, result: CheckResult) -> usize {
        self.results.get(&result).copied().unwrap_or(0)
    }
}

/// Check the tokens of all characters, or of one character
///
/// Characters are checked in order of their ID, biomassed characters and characters that
/// changed owner are deleted.
pub async fn check_tokens(
    db: &DatabaseConnection,
    esi_client: &eve_esi::Client,
    token_refresher: &TokenRefresher,
    character_id: Option<i64>,
    sleep_ms: u64,
) -> Result<CheckTokensSummary, Error> {
    tracing::info!("Started \"check-tokens\"");

    let character_repo = CharacterRepository::new(db);
    let character_ids = match character_id {
        Some(character_id) => vec![character_id],
        None => collect_ids(|offset, limit| character_repo.get_ids(offset, limit)).await?,
    };

    let check = CharacterCheck::new(db, esi_client, token_refresher);
    let mut summary = CheckTokensSummary::default();

    for character_id in character_ids {
        match character_repo.get(character_id).await? {
            None => {
                tracing::info!("Character {}: not found", character_id);
                summary.not_found += 1;
            }
            Some(character) => match check.check_character(character).await {
                Ok(result) => {
                    tracing::info!("Character {}: {}", character_id, result.label());
                    *summary.results.entry(result).or_default() += 1;
                }
                Err(err) => {
                    tracing::error!("Character {}: check failed: {}", character_id, err);
                    summary.failed += 1;
                }
            },
        }

        pause(sleep_ms).await;
    }

    tracing::info!("Finished \"check-tokens\"");

    Ok(summary)
}

#[cfg(test)]
mod tests {
    mod check_tokens {
        use chrono::Utc;
        use neucore_test_utils::prelude::*;

        use crate::server::{
            command::check_tokens::check_tokens,
            data::account::character::CharacterRepository,
            service::{account::check::CheckResult, auth::token::TokenRefresher},
        };

        fn refresher(test: &TestContext) -> TokenRefresher {
            TokenRefresher::new(TEST_ESI_CLIENT_ID, TEST_ESI_CLIENT_SECRET, &test.token_url())
                .unwrap()
        }

        /// Expect every character to be checked and counted by result
        #[tokio::test]
        async fn counts_results() -> Result<(), TestError> {
            let mut test = test_setup_with_account_tables!()?;
            test.eve().insert_corporation(1000001, None).await?;
            let player = test.account().insert_player("Main").await?;
            test.account()
                .insert_character(player.id, 1, "Main", true)
                .await?;
            test.account()
                .insert_character(player.id, 2, "Biomassed", false)
                .await?;
            CharacterRepository::new(&test.db)
                .set_corporation(2, Some(1000001))
                .await?;
            test.account()
                .insert_character_with_token(
                    player.id,
                    3,
                    "Current",
                    false,
                    Utc::now().timestamp() + 600,
                )
                .await?;
            let token_refresher = refresher(&test);

            let summary = check_tokens(&test.db, &test.esi_client, &token_refresher, None, 0)
                .await?;

            assert_eq!(summary.count(CheckResult::TokenNotApplicable), 1);
            assert_eq!(summary.count(CheckResult::CharacterDeleted), 1);
            // The stored access token is not a JWT
            assert_eq!(summary.count(CheckResult::TokenParseError), 1);
            assert_eq!(summary.failed + summary.not_found, 0);
            assert!(CharacterRepository::new(&test.db).get(2).await?.is_none());

            Ok(())
        }

        /// Expect a single unknown character to be reported as not found
        #[tokio::test]
        async fn unknown_character() -> Result<(), TestError> {
            let test = test_setup_with_account_tables!()?;
            let token_refresher = refresher(&test);

            let summary = check_tokens(&test.db, &test.esi_client, &token_refresher, Some(5), 0)
                .await?;

            assert_eq!(summary.not_found, 1);
            assert!(summary.results.is_empty());

            Ok(())
        }
    }
}
