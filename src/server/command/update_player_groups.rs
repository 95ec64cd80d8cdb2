use sea_orm::DatabaseConnection;

use crate::server::{
    command::{collect_ids, pause, UpdateSummary},
    data::account::player::PlayerRepository,
    error::Error,
    service::group::AutoGroupAssignment,
};

pub const DEFAULT_SLEEP_MS: u64 = 20;

/// Update the automatic groups of all standard accounts, or of one account
///
/// Accounts updated longest ago go first. Group mappings are loaded once for the whole run.
pub async fn update_player_groups(
    db: &DatabaseConnection,
    player_id: Option<i32>,
    sleep_ms: u64,
) -> Result<UpdateSummary, Error> {
    tracing::info!("Started \"update-player-groups\"");

    let player_repo = PlayerRepository::new(db);
    let player_ids = match player_id {
        Some(player_id) => vec![player_id],
        None => {
            collect_ids(|offset, limit| player_repo.get_standard_ids_by_last_update(offset, limit))
                .await?
        }
    };

    let mut group_assignment = AutoGroupAssignment::new();
    let mut summary = UpdateSummary::default();

    for player_id in player_ids {
        match group_assignment
            .update_groups_in_transaction(db, player_id)
            .await
        {
            Ok(true) => {
                tracing::info!("  Account {} groups updated", player_id);
                summary.updated += 1;
            }
            Ok(false) => {
                tracing::info!("  Error updating {}", player_id);
                summary.failed += 1;
            }
            Err(err) => {
                tracing::error!("  Error updating {}: {}", player_id, err);
                summary.failed += 1;
            }
        }

        pause(sleep_ms).await;
    }

    tracing::info!("Finished \"update-player-groups\"");

    Ok(summary)
}
