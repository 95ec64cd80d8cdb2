use sea_orm::DatabaseConnection;

use crate::server::{
    command::{collect_ids, pause, UpdateSummary},
    data::eve::{alliance::AllianceRepository, corporation::CorporationRepository},
    error::Error,
    service::eve::EsiDataService,
};

pub const DEFAULT_SLEEP_MS: u64 = 50;

/// Update all corporations and then all alliances from ESI
///
/// With `corporation_id` only that corporation is updated, alliances are skipped.
/// Corporations never fetched or updated longest ago go first.
pub async fn update_corporations(
    db: &DatabaseConnection,
    esi_client: &eve_esi::Client,
    corporation_id: Option<i64>,
    sleep_ms: u64,
) -> Result<UpdateSummary, Error> {
    tracing::info!("Started \"update-corporations\"");

    let corporation_repo = CorporationRepository::new(db);
    let corporation_ids = match corporation_id {
        Some(corporation_id) => vec![corporation_id],
        None => {
            collect_ids(|offset, limit| corporation_repo.get_ids_by_last_update(offset, limit))
                .await?
        }
    };

    let esi_data = EsiDataService::new(db, esi_client);
    let mut summary = UpdateSummary::default();

    for corporation_id in corporation_ids {
        match esi_data.fetch_corporation(corporation_id).await {
            Ok(_) => {
                tracing::info!("  Corporation {}: update OK", corporation_id);
                summary.updated += 1;
            }
            Err(err) => {
                tracing::warn!("  Corporation {}: update NOK: {}", corporation_id, err);
                summary.failed += 1;
            }
        }

        pause(sleep_ms).await;
    }

    if corporation_id.is_none() {
        let alliance_repo = AllianceRepository::new(db);
        let alliance_ids = collect_ids(|offset, limit| alliance_repo.get_ids(offset, limit)).await?;

        for alliance_id in alliance_ids {
            match esi_data.fetch_alliance(alliance_id).await {
                Ok(_) => {
                    tracing::info!("  Alliance {}: update OK", alliance_id);
                    summary.updated += 1;
                }
                Err(err) => {
                    tracing::warn!("  Alliance {}: update NOK: {}", alliance_id, err);
                    summary.failed += 1;
                }
            }

            pause(sleep_ms).await;
        }
    }

    tracing::info!("Finished \"update-corporations\"");

    Ok(summary)
}
