use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::table::{
        AssignedTableDto, AssignedTablesDto, BulkActivationResultDto, BulkActivationSummaryDto,
        BulkDeactivationResultDto, BulkDeactivationSummaryDto, BulkTableResultDto,
    },
    server::{
        data::{
            business_member::BusinessMemberRepository, table::TableRepository,
            table_silence::TableSilenceRepository, user::UserRepository,
            waiter_call::WaiterCallRepository,
        },
        error::AppError,
        model::table::{Table, TableIds},
        service::table::{find_business_table, get_business_tables},
    },
};

/// Result of activating a single table.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    Activated(Table),
    AlreadyAssigned(Table),
}

/// Service for waiters taking and releasing responsibility for tables.
///
/// A table has at most one active waiter. Calls made from a table are routed to that
/// waiter, so releasing a table cancels its pending calls.
pub struct TableActivationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableActivationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a table of the active business to the waiter.
    ///
    /// A table held by a user who was deleted or left the business is taken over.
    ///
    /// # Returns
    /// - `Ok(Activation::Activated)` - The waiter now holds the table
    /// - `Ok(Activation::AlreadyAssigned)` - The waiter already held it
    /// - `Err(AppError::NotFound)` - No such table
    /// - `Err(AppError::Forbidden)` - The table belongs to another business
    /// - `Err(AppError::Conflict)` - Another current member holds the table
    pub async fn activate(
        &self,
        user_id: i32,
        business_id: i32,
        table_id: i32,
    ) -> Result<Activation, AppError> {
        let table = find_business_table(self.db, business_id, table_id).await?;

        if table.is_assigned_to(user_id) {
            return Ok(Activation::AlreadyAssigned(table));
        }

        if let Some(holder_id) = table.active_waiter_id {
            if let Some(name) = current_holder_name(self.db, business_id, holder_id).await? {
                return Err(AppError::Conflict(format!(
                    "Table is already assigned to {}",
                    name
                )));
            }

            tracing::info!(
                "Reassigning table {} from departed waiter {} to {}",
                table.id,
                holder_id,
                user_id
            );
        }

        let table = TableRepository::new(self.db)
            .assign_waiter(table.id, user_id, Utc::now())
            .await?;

        Ok(Activation::Activated(table))
    }

    /// Releases a table held by the waiter and cancels its pending calls.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cancelled calls
    /// - `Err(AppError::Conflict)` - The table is not assigned to the waiter
    pub async fn deactivate(
        &self,
        user_id: i32,
        business_id: i32,
        table_id: i32,
    ) -> Result<u64, AppError> {
        let table = find_business_table(self.db, business_id, table_id).await?;

        if !table.is_assigned_to(user_id) {
            return Err(AppError::Conflict(
                "Table is not assigned to you".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let cancelled = WaiterCallRepository::new(&txn)
            .cancel_pending_for_table(table.id)
            .await?;
        TableRepository::new(&txn).unassign(table.id).await?;

        txn.commit().await?;

        Ok(cancelled)
    }

    /// Assigns several tables at once in a single transaction.
    ///
    /// Tables held by other current members are reported as conflicts and left untouched.
    ///
    /// # Returns
    /// - `Ok(BulkActivationResultDto)` - Per-table outcome and totals
    /// - `Err(AppError::BadRequest)` - A table is outside the active business
    pub async fn activate_many(
        &self,
        user_id: i32,
        business_id: i32,
        ids: TableIds,
    ) -> Result<BulkActivationResultDto, AppError> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let tables = get_business_tables(&txn, business_id, &ids).await?;
        let table_repo = TableRepository::new(&txn);

        let mut results = Vec::with_capacity(tables.len());
        let mut summary = BulkActivationSummaryDto {
            activated: 0,
            already_assigned: 0,
            conflicts: 0,
        };

        for table in tables {
            if table.is_assigned_to(user_id) {
                summary.already_assigned += 1;
                results.push(table_result(&table, "already_assigned", None));
                continue;
            }

            if let Some(holder_id) = table.active_waiter_id {
                if let Some(name) = current_holder_name(&txn, business_id, holder_id).await? {
                    summary.conflicts += 1;
                    results.push(table_result(
                        &table,
                        "assigned_to_other",
                        Some(format!("Assigned to {}", name)),
                    ));
                    continue;
                }
            }

            table_repo.assign_waiter(table.id, user_id, now).await?;
            summary.activated += 1;
            results.push(table_result(&table, "activated", None));
        }

        txn.commit().await?;

        Ok(BulkActivationResultDto { results, summary })
    }

    /// Releases several tables at once in a single transaction.
    ///
    /// Tables not held by the waiter are reported as `not_assigned`.
    pub async fn deactivate_many(
        &self,
        user_id: i32,
        business_id: i32,
        ids: TableIds,
    ) -> Result<BulkDeactivationResultDto, AppError> {
        let txn = self.db.begin().await?;

        let tables = get_business_tables(&txn, business_id, &ids).await?;
        let table_repo = TableRepository::new(&txn);
        let call_repo = WaiterCallRepository::new(&txn);

        let mut results = Vec::with_capacity(tables.len());
        let mut summary = BulkDeactivationSummaryDto {
            deactivated: 0,
            not_assigned: 0,
            cancelled_calls: 0,
        };

        for table in tables {
            if !table.is_assigned_to(user_id) {
                summary.not_assigned += 1;
                results.push(table_result(&table, "not_assigned", None));
                continue;
            }

            let cancelled = call_repo.cancel_pending_for_table(table.id).await?;
            table_repo.unassign(table.id).await?;

            summary.deactivated += 1;
            summary.cancelled_calls += cancelled;

            let mut result = table_result(&table, "deactivated", None);
            result.cancelled_calls = Some(cancelled);
            results.push(result);
        }

        txn.commit().await?;

        Ok(BulkDeactivationResultDto { results, summary })
    }

    /// Gets the waiter's tables with pending call counts and silence state.
    pub async fn get_assigned(
        &self,
        user_id: i32,
        business_id: i32,
    ) -> Result<AssignedTablesDto, AppError> {
        let now = Utc::now();

        let tables = TableRepository::new(self.db)
            .get_assigned_to(business_id, user_id)
            .await?;
        let table_ids = tables.iter().map(|table| table.id).collect::<Vec<_>>();

        let pending = WaiterCallRepository::new(self.db)
            .count_pending_for_tables(&table_ids)
            .await?;
        let mut silences = TableSilenceRepository::new(self.db)
            .get_active_for_tables(&table_ids, now)
            .await?;

        let tables = tables
            .into_iter()
            .map(|table| AssignedTableDto {
                pending_calls: pending.get(&table.id).copied().unwrap_or(0),
                silence: silences.remove(&table.id).map(|s| s.into_dto(now)),
                table: table.into_dto(),
            })
            .collect::<Vec<_>>();

        Ok(AssignedTablesDto {
            total: tables.len() as u64,
            tables,
        })
    }

    /// Gets tables of the business that nobody holds.
    pub async fn get_available(&self, business_id: i32) -> Result<Vec<Table>, AppError> {
        Ok(TableRepository::new(self.db)
            .get_available(business_id)
            .await?)
    }
}

/// Returns the holder's name when they still exist and still belong to the business.
async fn current_holder_name<C: ConnectionTrait>(
    db: &C,
    business_id: i32,
    holder_id: i32,
) -> Result<Option<String>, AppError> {
    let Some(holder) = UserRepository::new(db).find_by_id(holder_id).await? else {
        return Ok(None);
    };

    let is_member = BusinessMemberRepository::new(db)
        .find(business_id, holder_id)
        .await?
        .is_some();

    Ok(is_member.then_some(holder.name))
}

pub(super) fn table_result(table: &Table, status: &str, message: Option<String>) -> BulkTableResultDto {
    BulkTableResultDto {
        table_id: table.id,
        table_number: table.number,
        status: status.to_string(),
        message,
        cancelled_calls: None,
    }
}
