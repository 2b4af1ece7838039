use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, service::lock::LockService, state::AppState};

/// Starts the lock expiry scheduler
///
/// This scheduler runs every minute and unlocks every channel whose lock has
/// expired, restoring the game bot's access and posting an unlock notice
/// attributed to the bot.
///
/// # Arguments
/// - `state`: Application state holding the registry and gateway
///
/// # Returns
/// - `Ok(())`: The job is scheduled and running
/// - `Err(AppError::SchedulerErr)`: The scheduler could not be created or started
pub async fn start_scheduler(state: AppState) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            sweep_expired_locks(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Lock expiry scheduler started");

    Ok(())
}

/// Unlocks every expired channel once.
async fn sweep_expired_locks(state: &AppState) {
    let unlocked = LockService::new(state).sweep(Utc::now()).await;

    if unlocked > 0 {
        tracing::info!("Expiry sweep unlocked {} channel(s)", unlocked);
    } else {
        tracing::debug!("Expiry sweep found nothing to unlock");
    }
}
