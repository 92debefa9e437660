use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::expiry::ExpiryService};

/// Starts the expiry scheduler
///
/// Runs every minute and closes silences and IP blocks whose expiry has passed.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = process_expiry(&db).await {
                tracing::error!("Error closing expired silences and IP blocks: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Expiry scheduler started");

    Ok(())
}

async fn process_expiry(db: &DatabaseConnection) -> Result<(), AppError> {
    let sweep = ExpiryService::new(db).close_expired(Utc::now()).await?;

    if sweep.silences > 0 || sweep.ip_blocks > 0 {
        tracing::debug!(
            "Closed {} expired silences and {} expired IP blocks",
            sweep.silences,
            sweep.ip_blocks
        );
    }

    Ok(())
}
