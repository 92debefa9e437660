//! Table silence repository.
//!
//! A silence is active while `unsilenced_at` is null and `expires_at` is null or in the
//! future. All "active" queries apply that predicate in SQL.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Condition, Expr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::silence::{CreateSilenceParam, TableSilence};

pub struct TableSilenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Rows not lifted and not yet expired at `now`.
fn active_condition(now: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(entity::table_silence::Column::UnsilencedAt.is_null())
        .add(
            Condition::any()
                .add(entity::table_silence::Column::ExpiresAt.is_null())
                .add(entity::table_silence::Column::ExpiresAt.gt(now)),
        )
}

impl<'a, C: ConnectionTrait> TableSilenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateSilenceParam) -> Result<TableSilence, DbErr> {
        let entity = entity::table_silence::ActiveModel {
            table_id: ActiveValue::Set(param.table_id),
            silenced_by: ActiveValue::Set(param.silenced_by),
            reason: ActiveValue::Set(param.reason.as_str().to_string()),
            notes: ActiveValue::Set(param.notes),
            call_count: ActiveValue::Set(param.call_count),
            silenced_at: ActiveValue::Set(param.silenced_at),
            expires_at: ActiveValue::Set(param.expires_at),
            unsilenced_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TableSilence::from_entity(entity)
    }

    /// Finds the newest active silence of a table.
    pub async fn find_active_for_table(
        &self,
        table_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<TableSilence>, DbErr> {
        entity::prelude::TableSilence::find()
            .filter(entity::table_silence::Column::TableId.eq(table_id))
            .filter(active_condition(now))
            .order_by_desc(entity::table_silence::Column::SilencedAt)
            .one(self.db)
            .await?
            .map(TableSilence::from_entity)
            .transpose()
    }

    /// Gets the newest active silence per table for a set of tables.
    pub async fn get_active_for_tables(
        &self,
        table_ids: &[i32],
        now: DateTime<Utc>,
    ) -> Result<HashMap<i32, TableSilence>, DbErr> {
        if table_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::TableSilence::find()
            .filter(entity::table_silence::Column::TableId.is_in(table_ids.to_vec()))
            .filter(active_condition(now))
            .order_by_asc(entity::table_silence::Column::SilencedAt)
            .all(self.db)
            .await?;

        // Later rows overwrite earlier ones, leaving the newest per table.
        let mut silences = HashMap::new();
        for row in rows {
            let silence = TableSilence::from_entity(row)?;
            silences.insert(silence.table_id, silence);
        }

        Ok(silences)
    }

    /// Lifts every active silence of a table.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of silences lifted
    /// - `Err(DbErr)` - Database error
    pub async fn unsilence_table(&self, table_id: i32, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::TableSilence::update_many()
            .col_expr(
                entity::table_silence::Column::UnsilencedAt,
                Expr::value(Some(now)),
            )
            .filter(entity::table_silence::Column::TableId.eq(table_id))
            .filter(active_condition(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Closes silences whose expiry has passed by stamping `unsilenced_at`.
    pub async fn close_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::TableSilence::update_many()
            .col_expr(
                entity::table_silence::Column::UnsilencedAt,
                Expr::value(Some(now)),
            )
            .filter(entity::table_silence::Column::UnsilencedAt.is_null())
            .filter(entity::table_silence::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
