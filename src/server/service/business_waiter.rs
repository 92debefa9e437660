use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::business_waiter::{
        BusinessTableDto, BusinessTableStatisticsDto, BusinessTablesDto, LeaveBusinessResultDto,
        TableStatsDto, WaiterBusinessDto, WaiterBusinessesDto,
    },
    server::{
        data::{
            business::BusinessRepository, business_member::BusinessMemberRepository,
            table::TableRepository, table_silence::TableSilenceRepository,
            user::UserRepository, user_active_role::UserActiveRoleRepository,
            waiter_call::WaiterCallRepository,
        },
        error::AppError,
        model::{business::MemberRole, table::Table, user::User},
    },
};

/// How a table relates to the requesting waiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableStatus {
    AssignedToMe,
    Available,
    Occupied,
}

impl TableStatus {
    fn of(table: &Table, user_id: i32) -> Self {
        match table.active_waiter_id {
            Some(id) if id == user_id => Self::AssignedToMe,
            Some(_) => Self::Occupied,
            None => Self::Available,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::AssignedToMe => "assigned_to_me",
            Self::Available => "available",
            Self::Occupied => "occupied",
        }
    }
}

/// Service for a waiter's view across every business they belong to.
pub struct BusinessWaiterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessWaiterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets each membership of the user with table statistics and pending call counts.
    pub async fn get_businesses(&self, user: &User) -> Result<WaiterBusinessesDto, AppError> {
        let memberships = BusinessMemberRepository::new(self.db)
            .get_for_user(user.id)
            .await?;

        let table_repo = TableRepository::new(self.db);
        let call_repo = WaiterCallRepository::new(self.db);

        let mut businesses = Vec::with_capacity(memberships.len());
        for membership in memberships {
            let business_id = membership.business.id;
            let tables = table_repo.get_by_business(business_id).await?;
            let pending_calls = call_repo
                .count_pending_for_waiter(business_id, user.id)
                .await?;

            let mut table_stats = TableStatsDto {
                total: tables.len() as u64,
                assigned_to_me: 0,
                available: 0,
                occupied_by_others: 0,
            };
            for table in &tables {
                match TableStatus::of(table, user.id) {
                    TableStatus::AssignedToMe => table_stats.assigned_to_me += 1,
                    TableStatus::Available => table_stats.available += 1,
                    TableStatus::Occupied => table_stats.occupied_by_others += 1,
                }
            }

            let is_admin = membership.role == MemberRole::Admin;
            businesses.push(WaiterBusinessDto {
                is_active: user.active_business_id == Some(business_id),
                role: membership.role.as_str().to_string(),
                business: membership.business.into_dto(is_admin),
                table_stats,
                pending_calls,
            });
        }

        Ok(WaiterBusinessesDto {
            businesses,
            active_business_id: user.active_business_id,
        })
    }

    /// Gets every table of a business with its status relative to the user.
    ///
    /// # Returns
    /// - `Ok(BusinessTablesDto)` - Tables ordered by number, plus totals
    /// - `Err(AppError::NotFound)` - No such business
    /// - `Err(AppError::Forbidden)` - The user is not a member
    pub async fn get_tables(&self, user: &User, business_id: i32) -> Result<BusinessTablesDto, AppError> {
        let now = Utc::now();

        let membership = BusinessMemberRepository::new(self.db)
            .find(business_id, user.id)
            .await?
            .ok_or_else(|| AppError::Forbidden("You do not belong to this business".to_string()))?;

        let business = BusinessRepository::new(self.db)
            .find_by_id(business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let tables = TableRepository::new(self.db)
            .get_by_business(business_id)
            .await?;
        let table_ids: Vec<i32> = tables.iter().map(|t| t.id).collect();

        let call_repo = WaiterCallRepository::new(self.db);
        let pending = call_repo.count_pending_for_tables(&table_ids).await?;
        let mut latest = call_repo.get_latest_for_tables(&table_ids).await?;
        let mut silences = TableSilenceRepository::new(self.db)
            .get_active_for_tables(&table_ids, now)
            .await?;

        let mut waiter_ids: Vec<i32> = tables.iter().filter_map(|t| t.active_waiter_id).collect();
        waiter_ids.sort_unstable();
        waiter_ids.dedup();
        let names: HashMap<i32, String> = UserRepository::new(self.db).get_names(&waiter_ids).await?;

        let mut statistics = BusinessTableStatisticsDto {
            total: tables.len() as u64,
            assigned_to_me: 0,
            available: 0,
            occupied_by_others: 0,
            silenced: 0,
            pending_calls: 0,
        };

        let mut rows = Vec::with_capacity(tables.len());
        for table in tables {
            let status = TableStatus::of(&table, user.id);
            let pending_calls = pending.get(&table.id).copied().unwrap_or(0);
            let silence = silences.remove(&table.id);
            let latest_call = latest.remove(&table.id).map(|call| call.into_dto(Some(&table), now));

            match status {
                TableStatus::AssignedToMe => statistics.assigned_to_me += 1,
                TableStatus::Available => statistics.available += 1,
                TableStatus::Occupied => statistics.occupied_by_others += 1,
            }
            if silence.is_some() {
                statistics.silenced += 1;
            }
            statistics.pending_calls += pending_calls;

            let mut actions_available = Vec::new();
            match status {
                TableStatus::AssignedToMe => actions_available.push("deactivate".to_string()),
                TableStatus::Available => actions_available.push("activate".to_string()),
                TableStatus::Occupied => {}
            }
            if status != TableStatus::Occupied || membership.is_admin() {
                match &silence {
                    Some(s) if s.can_unsilence() => actions_available.push("unsilence".to_string()),
                    Some(_) => {}
                    None => actions_available.push("silence".to_string()),
                }
            }

            rows.push(BusinessTableDto {
                waiter_name: table
                    .active_waiter_id
                    .and_then(|id| names.get(&id).cloned()),
                status: status.as_str().to_string(),
                pending_calls,
                latest_call,
                silence: silence.map(|s| s.into_dto(now)),
                actions_available,
                table: table.into_dto(),
            });
        }

        Ok(BusinessTablesDto {
            business: business.into_dto(membership.is_admin()),
            tables: rows,
            statistics,
        })
    }

    /// Removes the user from a business in one transaction.
    ///
    /// Pending calls routed to the user are cancelled and their tables released. When the
    /// business was active, the user switches to their next membership, if any.
    ///
    /// # Returns
    /// - `Ok(LeaveBusinessResultDto)` - The new active business and what was released
    /// - `Err(AppError::NotFound)` - The user is not a member
    pub async fn leave(&self, user: &User, business_id: i32) -> Result<LeaveBusinessResultDto, AppError> {
        let txn = self.db.begin().await?;

        let member_repo = BusinessMemberRepository::new(&txn);
        if member_repo.find(business_id, user.id).await?.is_none() {
            return Err(AppError::NotFound(
                "You are not a member of this business".to_string(),
            ));
        }

        let cancelled_calls = WaiterCallRepository::new(&txn)
            .cancel_pending_for_waiter(business_id, user.id)
            .await?;
        let released_tables = TableRepository::new(&txn)
            .unassign_all_for_waiter(business_id, user.id)
            .await?;
        member_repo.delete(business_id, user.id).await?;
        UserActiveRoleRepository::new(&txn)
            .delete(user.id, business_id)
            .await?;

        let mut new_active_business_id = user.active_business_id;
        if user.active_business_id == Some(business_id) {
            new_active_business_id = member_repo
                .get_for_user(user.id)
                .await?
                .first()
                .map(|m| m.business.id);
            UserRepository::new(&txn)
                .set_active_business(user.id, new_active_business_id)
                .await?;
        }

        txn.commit().await?;

        tracing::info!(
            "User {} left business {}: {} calls cancelled, {} tables released",
            user.id,
            business_id,
            cancelled_calls,
            released_tables
        );

        Ok(LeaveBusinessResultDto {
            message: "You have left the business".to_string(),
            new_active_business_id,
            cancelled_calls,
            released_tables,
        })
    }
}
