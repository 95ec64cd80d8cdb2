//! Batch commands run from the command line or the scheduler.
//!
//! Each command works on one unit (character, account, corporation) at a time and commits
//! it before moving on, a failed unit is logged and skipped. IDs are collected before the
//! first unit is processed since processing changes the ordering columns.

pub mod assure_main;
pub mod check_tokens;
pub mod update_chars;
pub mod update_corporations;
pub mod update_player_groups;

use std::{future::Future, time::Duration};

use sea_orm::DbErr;

use crate::server::util::eve::BATCH_PAGE_SIZE;

/// Counts of a command run over many units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
    pub updated: usize,
    pub failed: usize,
}

/// Load every ID of a paged query, [`BATCH_PAGE_SIZE`] rows at a time.
async fn collect_ids<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, DbErr>
where
    F: FnMut(u64, u64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, DbErr>>,
{
    let mut ids = Vec::new();
    let mut offset = 0;

    loop {
        let page = fetch_page(offset, BATCH_PAGE_SIZE).await?;
        let page_len = page.len() as u64;
        ids.extend(page);

        if page_len < BATCH_PAGE_SIZE {
            return Ok(ids);
        }
        offset += page_len;
    }
}

/// Pause between units to spread the load on the database and ESI
async fn pause(sleep_ms: u64) {
    if sleep_ms > 0 {
        tokio::time::sleep(Duration::from_millis(sleep_ms)).await;
    }
}
