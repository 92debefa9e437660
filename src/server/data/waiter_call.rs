//! Waiter call repository.
//!
//! Provides the lookups the anti-spam checks need (recent calls per table, pending
//! duplicates) as well as status transitions and history queries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::waiter_call::{
    CallStatus, CreateCallParam, HistoryScope, WaiterCall,
};

pub struct WaiterCallRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WaiterCallRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending call.
    pub async fn create(&self, param: CreateCallParam) -> Result<WaiterCall, DbErr> {
        let entity = entity::waiter_call::ActiveModel {
            table_id: ActiveValue::Set(param.table_id),
            business_id: ActiveValue::Set(param.business_id),
            waiter_id: ActiveValue::Set(Some(param.waiter_id)),
            status: ActiveValue::Set(CallStatus::Pending.as_str().to_string()),
            message: ActiveValue::Set(param.message),
            urgency: ActiveValue::Set(param.urgency.as_str().to_string()),
            ip_address: ActiveValue::Set(param.ip_address),
            user_agent: ActiveValue::Set(param.user_agent),
            client_info: ActiveValue::Set(param.client_info),
            called_at: ActiveValue::Set(param.called_at),
            acknowledged_at: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        WaiterCall::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<WaiterCall>, DbErr> {
        entity::prelude::WaiterCall::find_by_id(id)
            .one(self.db)
            .await?
            .map(WaiterCall::from_entity)
            .transpose()
    }

    /// Counts calls of any status made from a table since `since`.
    pub async fn count_recent_for_table(
        &self,
        table_id: i32,
        since: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::TableId.eq(table_id))
            .filter(entity::waiter_call::Column::CalledAt.gte(since))
            .count(self.db)
            .await
    }

    /// Finds the newest pending call of a table, optionally only those made since `since`.
    pub async fn find_pending_for_table(
        &self,
        table_id: i32,
        since: Option<DateTime<Utc>>,
    ) -> Result<Option<WaiterCall>, DbErr> {
        let mut query = entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::TableId.eq(table_id))
            .filter(entity::waiter_call::Column::Status.eq(CallStatus::Pending.as_str()));

        if let Some(since) = since {
            query = query.filter(entity::waiter_call::Column::CalledAt.gte(since));
        }

        query
            .order_by_desc(entity::waiter_call::Column::CalledAt)
            .one(self.db)
            .await?
            .map(WaiterCall::from_entity)
            .transpose()
    }

    /// Moves a call to `acknowledged`.
    pub async fn acknowledge(&self, id: i32, at: DateTime<Utc>) -> Result<WaiterCall, DbErr> {
        let existing = self.find_model(id).await?;

        let mut active: entity::waiter_call::ActiveModel = existing.into();
        active.status = ActiveValue::Set(CallStatus::Acknowledged.as_str().to_string());
        active.acknowledged_at = ActiveValue::Set(Some(at));
        let entity = active.update(self.db).await?;

        WaiterCall::from_entity(entity)
    }

    /// Moves a call to `completed`, stamping `acknowledged_at` too if it was never set.
    pub async fn complete(&self, id: i32, at: DateTime<Utc>) -> Result<WaiterCall, DbErr> {
        let existing = self.find_model(id).await?;
        let acknowledged_at = existing.acknowledged_at.unwrap_or(at);

        let mut active: entity::waiter_call::ActiveModel = existing.into();
        active.status = ActiveValue::Set(CallStatus::Completed.as_str().to_string());
        active.acknowledged_at = ActiveValue::Set(Some(acknowledged_at));
        active.completed_at = ActiveValue::Set(Some(at));
        let entity = active.update(self.db).await?;

        WaiterCall::from_entity(entity)
    }

    /// Gets a waiter's pending calls, oldest first.
    pub async fn get_pending_for_waiter(&self, waiter_id: i32) -> Result<Vec<WaiterCall>, DbErr> {
        entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::WaiterId.eq(waiter_id))
            .filter(entity::waiter_call::Column::Status.eq(CallStatus::Pending.as_str()))
            .order_by_asc(entity::waiter_call::Column::CalledAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(WaiterCall::from_entity)
            .collect()
    }

    /// Cancels the pending calls of a table.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of calls cancelled
    /// - `Err(DbErr)` - Database error
    pub async fn cancel_pending_for_table(&self, table_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::WaiterCall::update_many()
            .col_expr(
                entity::waiter_call::Column::Status,
                Expr::value(CallStatus::Cancelled.as_str()),
            )
            .filter(entity::waiter_call::Column::TableId.eq(table_id))
            .filter(entity::waiter_call::Column::Status.eq(CallStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Cancels a waiter's pending calls within one business.
    pub async fn cancel_pending_for_waiter(
        &self,
        business_id: i32,
        waiter_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::WaiterCall::update_many()
            .col_expr(
                entity::waiter_call::Column::Status,
                Expr::value(CallStatus::Cancelled.as_str()),
            )
            .filter(entity::waiter_call::Column::BusinessId.eq(business_id))
            .filter(entity::waiter_call::Column::WaiterId.eq(waiter_id))
            .filter(entity::waiter_call::Column::Status.eq(CallStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count_pending_for_waiter(
        &self,
        business_id: i32,
        waiter_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::BusinessId.eq(business_id))
            .filter(entity::waiter_call::Column::WaiterId.eq(waiter_id))
            .filter(entity::waiter_call::Column::Status.eq(CallStatus::Pending.as_str()))
            .count(self.db)
            .await
    }

    /// Counts pending calls per table. Tables without pending calls are absent.
    pub async fn count_pending_for_tables(
        &self,
        table_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if table_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::TableId.is_in(table_ids.to_vec()))
            .filter(entity::waiter_call::Column::Status.eq(CallStatus::Pending.as_str()))
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for row in rows {
            *counts.entry(row.table_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    /// Gets the most recent call per table.
    pub async fn get_latest_for_tables(
        &self,
        table_ids: &[i32],
    ) -> Result<HashMap<i32, WaiterCall>, DbErr> {
        if table_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::TableId.is_in(table_ids.to_vec()))
            .order_by_asc(entity::waiter_call::Column::CalledAt)
            .order_by_asc(entity::waiter_call::Column::Id)
            .all(self.db)
            .await?;

        let mut latest = HashMap::new();
        for row in rows {
            let call = WaiterCall::from_entity(row)?;
            latest.insert(call.table_id, call);
        }

        Ok(latest)
    }

    /// Gets a page of call history, newest first.
    ///
    /// # Arguments
    /// - `scope` - Business-wide for admins or a single waiter
    /// - `since` - Earliest `called_at`, or `None` for all time
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((Vec<WaiterCall>, u64))` - The page and the total number of matching calls
    /// - `Err(DbErr)` - Database error
    pub async fn get_history(
        &self,
        scope: HistoryScope,
        since: Option<DateTime<Utc>>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<WaiterCall>, u64), DbErr> {
        let mut query = entity::prelude::WaiterCall::find();

        query = match scope {
            HistoryScope::Business(business_id) => {
                query.filter(entity::waiter_call::Column::BusinessId.eq(business_id))
            }
            HistoryScope::Waiter(waiter_id) => {
                query.filter(entity::waiter_call::Column::WaiterId.eq(waiter_id))
            }
        };

        if let Some(since) = since {
            query = query.filter(entity::waiter_call::Column::CalledAt.gte(since));
        }

        let paginator = query
            .order_by_desc(entity::waiter_call::Column::CalledAt)
            .order_by_desc(entity::waiter_call::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let calls = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(WaiterCall::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((calls, total))
    }

    /// Gets the latest calls made from an IP within a business.
    pub async fn get_recent_by_ip(
        &self,
        business_id: i32,
        ip_address: &str,
        limit: u64,
    ) -> Result<Vec<WaiterCall>, DbErr> {
        entity::prelude::WaiterCall::find()
            .filter(entity::waiter_call::Column::BusinessId.eq(business_id))
            .filter(entity::waiter_call::Column::IpAddress.eq(ip_address))
            .order_by_desc(entity::waiter_call::Column::CalledAt)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(WaiterCall::from_entity)
            .collect()
    }

    async fn find_model(&self, id: i32) -> Result<entity::waiter_call::Model, DbErr> {
        entity::prelude::WaiterCall::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Waiter call {} not found", id)))
    }
}
