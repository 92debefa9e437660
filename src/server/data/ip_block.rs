//! IP block repository.
//!
//! Blocks are scoped to a business. A block is active while `unblocked_at` is null and
//! `expires_at` is null or in the future.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ip_block::{BlockReason, CreateIpBlockParam, IpBlock};

pub struct IpBlockRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

fn active_condition(now: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(entity::ip_block::Column::UnblockedAt.is_null())
        .add(
            Condition::any()
                .add(entity::ip_block::Column::ExpiresAt.is_null())
                .add(entity::ip_block::Column::ExpiresAt.gt(now)),
        )
}

impl<'a, C: ConnectionTrait> IpBlockRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateIpBlockParam) -> Result<IpBlock, DbErr> {
        let entity = entity::ip_block::ActiveModel {
            business_id: ActiveValue::Set(param.business_id),
            ip_address: ActiveValue::Set(param.ip_address),
            blocked_by: ActiveValue::Set(param.blocked_by),
            reason: ActiveValue::Set(param.reason.as_str().to_string()),
            notes: ActiveValue::Set(param.notes),
            blocked_at: ActiveValue::Set(param.blocked_at),
            expires_at: ActiveValue::Set(param.expires_at),
            unblocked_at: ActiveValue::Set(None),
            metadata: ActiveValue::Set(param.metadata),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        IpBlock::from_entity(entity)
    }

    pub async fn is_blocked(
        &self,
        business_id: i32,
        ip_address: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::IpBlock::find()
            .filter(entity::ip_block::Column::BusinessId.eq(business_id))
            .filter(entity::ip_block::Column::IpAddress.eq(ip_address))
            .filter(active_condition(now))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lifts the active blocks of an IP in a business.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of blocks lifted, zero if the IP was not blocked
    /// - `Err(DbErr)` - Database error
    pub async fn unblock(
        &self,
        business_id: i32,
        ip_address: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::IpBlock::update_many()
            .col_expr(entity::ip_block::Column::UnblockedAt, Expr::value(Some(now)))
            .filter(entity::ip_block::Column::BusinessId.eq(business_id))
            .filter(entity::ip_block::Column::IpAddress.eq(ip_address))
            .filter(active_condition(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Stamps `unblocked_at` on every open record of an IP, expired or not.
    pub async fn force_unblock(
        &self,
        business_id: i32,
        ip_address: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::IpBlock::update_many()
            .col_expr(entity::ip_block::Column::UnblockedAt, Expr::value(Some(now)))
            .filter(entity::ip_block::Column::BusinessId.eq(business_id))
            .filter(entity::ip_block::Column::IpAddress.eq(ip_address))
            .filter(entity::ip_block::Column::UnblockedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every block record of an IP in a business, newest first.
    pub async fn get_for_ip(
        &self,
        business_id: i32,
        ip_address: &str,
    ) -> Result<Vec<IpBlock>, DbErr> {
        entity::prelude::IpBlock::find()
            .filter(entity::ip_block::Column::BusinessId.eq(business_id))
            .filter(entity::ip_block::Column::IpAddress.eq(ip_address))
            .order_by_desc(entity::ip_block::Column::BlockedAt)
            .order_by_desc(entity::ip_block::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(IpBlock::from_entity)
            .collect()
    }

    /// Gets a page of a business's blocks, newest first.
    ///
    /// # Arguments
    /// - `active_only` - Restrict to blocks active at `now`
    /// - `reason` - Restrict to one reason
    /// - `page` - Zero-indexed page number
    pub async fn get_paginated(
        &self,
        business_id: i32,
        active_only: bool,
        reason: Option<BlockReason>,
        now: DateTime<Utc>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<IpBlock>, u64), DbErr> {
        let mut query = entity::prelude::IpBlock::find()
            .filter(entity::ip_block::Column::BusinessId.eq(business_id));

        if active_only {
            query = query.filter(active_condition(now));
        }
        if let Some(reason) = reason {
            query = query.filter(entity::ip_block::Column::Reason.eq(reason.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::ip_block::Column::BlockedAt)
            .order_by_desc(entity::ip_block::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let blocks = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(IpBlock::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((blocks, total))
    }

    /// Closes blocks whose expiry has passed by stamping `unblocked_at`.
    pub async fn close_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::IpBlock::update_many()
            .col_expr(entity::ip_block::Column::UnblockedAt, Expr::value(Some(now)))
            .filter(entity::ip_block::Column::UnblockedAt.is_null())
            .filter(entity::ip_block::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
