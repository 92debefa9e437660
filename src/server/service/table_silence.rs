use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::silence::{BulkSilenceResultDto, BulkSilenceSummaryDto, SilencedTableDto, SilencedTablesDto},
    server::{
        data::{
            table::TableRepository, table_silence::TableSilenceRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            silence::{CreateSilenceParam, SilenceParam, SilenceReason, TableSilence},
            table::TableIds,
        },
        service::{
            table::{find_business_table, get_business_tables},
            table_activation::table_result,
        },
    },
};

/// Service for pausing customer calls from tables.
///
/// While a table has an active silence, calls from it are answered with a "silenced"
/// status and are neither stored nor forwarded.
pub struct TableSilenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableSilenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Manually silences a table for the requested duration.
    ///
    /// # Returns
    /// - `Ok(TableSilence)` - The new silence
    /// - `Err(AppError::NotFound)` - No such table
    /// - `Err(AppError::Forbidden)` - The table belongs to another business
    /// - `Err(AppError::Conflict)` - The table is already silenced
    pub async fn silence(
        &self,
        user_id: i32,
        business_id: i32,
        table_id: i32,
        param: SilenceParam,
    ) -> Result<TableSilence, AppError> {
        let table = find_business_table(self.db, business_id, table_id).await?;
        let repo = TableSilenceRepository::new(self.db);
        let now = Utc::now();

        if repo.find_active_for_table(table.id, now).await?.is_some() {
            return Err(AppError::Conflict("Table is already silenced".to_string()));
        }

        let silence = repo
            .create(CreateSilenceParam {
                table_id: table.id,
                silenced_by: Some(user_id),
                reason: SilenceReason::Manual,
                notes: param.notes,
                call_count: None,
                silenced_at: now,
                expires_at: Some(now + param.duration),
            })
            .await?;

        tracing::info!("User {} silenced table {}", user_id, table.id);

        Ok(silence)
    }

    /// Ends the active silence of a table.
    ///
    /// # Returns
    /// - `Ok(())` - The silence was lifted
    /// - `Err(AppError::NotFound)` - No such table, or it is not silenced
    pub async fn unsilence(&self, business_id: i32, table_id: i32) -> Result<(), AppError> {
        let table = find_business_table(self.db, business_id, table_id).await?;

        let lifted = TableSilenceRepository::new(self.db)
            .unsilence_table(table.id, Utc::now())
            .await?;

        if lifted == 0 {
            return Err(AppError::NotFound("Table is not silenced".to_string()));
        }

        Ok(())
    }

    /// Gets the active silences of a business's tables.
    pub async fn get_silenced(&self, business_id: i32) -> Result<SilencedTablesDto, AppError> {
        let now = Utc::now();

        let tables = TableRepository::new(self.db)
            .get_by_business(business_id)
            .await?;
        let table_ids = tables.iter().map(|table| table.id).collect::<Vec<_>>();

        let mut silences = TableSilenceRepository::new(self.db)
            .get_active_for_tables(&table_ids, now)
            .await?;

        let silencer_ids = silences
            .values()
            .filter_map(|silence| silence.silenced_by)
            .collect::<Vec<_>>();
        let names = UserRepository::new(self.db).get_names(&silencer_ids).await?;

        let tables = tables
            .into_iter()
            .filter_map(|table| {
                let silence = silences.remove(&table.id)?;

                Some(SilencedTableDto {
                    table_id: table.id,
                    table_number: table.number,
                    table_name: table.name,
                    silenced_by_name: silence
                        .silenced_by
                        .and_then(|id| names.get(&id).cloned()),
                    can_unsilence: silence.can_unsilence(),
                    silence: silence.into_dto(now),
                })
            })
            .collect::<Vec<_>>();

        Ok(SilencedTablesDto {
            total: tables.len() as u64,
            tables,
        })
    }

    /// Silences several tables in a single transaction, skipping ones already silenced.
    pub async fn silence_many(
        &self,
        user_id: i32,
        business_id: i32,
        ids: TableIds,
        param: SilenceParam,
    ) -> Result<BulkSilenceResultDto, AppError> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let tables = get_business_tables(&txn, business_id, &ids).await?;
        let repo = TableSilenceRepository::new(&txn);

        let mut results = Vec::with_capacity(tables.len());
        let mut summary = BulkSilenceSummaryDto {
            changed: 0,
            unchanged: 0,
        };

        for table in tables {
            if repo.find_active_for_table(table.id, now).await?.is_some() {
                summary.unchanged += 1;
                results.push(table_result(&table, "already_silenced", None));
                continue;
            }

            repo.create(CreateSilenceParam {
                table_id: table.id,
                silenced_by: Some(user_id),
                reason: SilenceReason::Manual,
                notes: param.notes.clone(),
                call_count: None,
                silenced_at: now,
                expires_at: Some(now + param.duration),
            })
            .await?;

            summary.changed += 1;
            results.push(table_result(&table, "silenced", None));
        }

        txn.commit().await?;

        Ok(BulkSilenceResultDto { results, summary })
    }

    /// Lifts the silences of several tables in a single transaction.
    pub async fn unsilence_many(
        &self,
        business_id: i32,
        ids: TableIds,
    ) -> Result<BulkSilenceResultDto, AppError> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let tables = get_business_tables(&txn, business_id, &ids).await?;
        let repo = TableSilenceRepository::new(&txn);

        let mut results = Vec::with_capacity(tables.len());
        let mut summary = BulkSilenceSummaryDto {
            changed: 0,
            unchanged: 0,
        };

        for table in tables {
            if repo.unsilence_table(table.id, now).await? > 0 {
                summary.changed += 1;
                results.push(table_result(&table, "unsilenced", None));
            } else {
                summary.unchanged += 1;
                results.push(table_result(&table, "not_silenced", None));
            }
        }

        txn.commit().await?;

        Ok(BulkSilenceResultDto { results, summary })
    }
}
