use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{ip_block::IpBlockRepository, table_silence::TableSilenceRepository},
    error::AppError,
};

/// Rows closed by one expiry sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpirySweep {
    pub silences: u64,
    pub ip_blocks: u64,
}

/// Stamps silences and IP blocks whose `expires_at` has passed.
///
/// Activity checks already treat expired rows as inactive; closing them keeps the
/// history consistent for listings that filter on the lifted timestamp.
pub struct ExpiryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpiryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn close_expired(&self, now: DateTime<Utc>) -> Result<ExpirySweep, AppError> {
        let silences = TableSilenceRepository::new(self.db).close_expired(now).await?;
        let ip_blocks = IpBlockRepository::new(self.db).close_expired(now).await?;

        Ok(ExpirySweep { silences, ip_blocks })
    }
}
