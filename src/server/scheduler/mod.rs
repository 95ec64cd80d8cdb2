//! Cron scheduler running the batch commands inside the server process.
//!
//! Every job runs the same code path as its command line counterpart with the default
//! sleep interval. Jobs do not lock against each other or against manual command runs.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    command::{
        check_tokens::{self, check_tokens},
        update_chars::{self, update_chars},
        update_corporations::{self, update_corporations},
        update_player_groups::{self, update_player_groups},
    },
    error::Error,
    model::app::AppState,
};

pub mod config;

/// Job scheduler for the periodic account and ESI data jobs.
pub struct Scheduler {
    state: AppState,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(state: AppState) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self { state, sched })
    }

    /// Registers all jobs and starts the scheduler.
    ///
    /// The following jobs are registered:
    /// - Token check of all characters
    /// - Automatic group update of all standard accounts
    /// - Character affiliation update
    /// - Corporation and alliance update
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            config::check_tokens::CRON_EXPRESSION,
            "check tokens",
            |state| async move {
                let summary = check_tokens(
                    &state.db,
                    &state.esi_client,
                    &state.token_refresher,
                    None,
                    check_tokens::DEFAULT_SLEEP_MS,
                )
                .await?;

                Ok::<_, Error>(summary.results.values().sum::<usize>())
            },
        )
        .await?;

        self.schedule_job(
            config::update_player_groups::CRON_EXPRESSION,
            "update player groups",
            |state| async move {
                let summary =
                    update_player_groups(&state.db, None, update_player_groups::DEFAULT_SLEEP_MS)
                        .await?;

                Ok::<_, Error>(summary.updated)
            },
        )
        .await?;

        self.schedule_job(
            config::update_chars::CRON_EXPRESSION,
            "update characters",
            |state| async move {
                let summary = update_chars(
                    &state.db,
                    &state.esi_client,
                    None,
                    update_chars::DEFAULT_SLEEP_MS,
                )
                .await?;

                Ok::<_, Error>(summary.updated)
            },
        )
        .await?;

        self.schedule_job(
            config::update_corporations::CRON_EXPRESSION,
            "update corporations",
            |state| async move {
                let summary = update_corporations(
                    &state.db,
                    &state.esi_client,
                    None,
                    update_corporations::DEFAULT_SLEEP_MS,
                )
                .await?;

                Ok::<_, Error>(summary.updated)
            },
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of processed units (on success) or the error
    /// that stopped the run.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async function running the job, returning the count of processed units
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(AppState) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<usize, Error>> + Send + 'static,
    {
        let state = self.state.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let state = state.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(state).await {
                        Ok(count) => tracing::debug!("Job {} processed {} unit(s)", name, count),
                        Err(e) => tracing::error!("Error running job {}: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}
