use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{api::PaginationDto, waiter_call::CallHistoryDto},
    server::{
        data::{
            business_member::BusinessMemberRepository, table::TableRepository,
            waiter_call::WaiterCallRepository,
        },
        error::AppError,
        model::waiter_call::{HistoryFilter, HistoryScope},
    },
};

pub const DEFAULT_HISTORY_LIMIT: u64 = 20;
pub const MAX_HISTORY_LIMIT: u64 = 100;

pub struct CallHistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CallHistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a page of call history, newest first.
    ///
    /// Admins of the active business see every call of the business; everyone else sees
    /// the calls routed to them.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user
    /// - `business_id` - The user's active business, if any
    /// - `filter` - Time window
    /// - `page` - 1-based page number
    /// - `limit` - Page size, clamped to 1..=100
    pub async fn get_history(
        &self,
        user_id: i32,
        business_id: Option<i32>,
        filter: HistoryFilter,
        page: u64,
        limit: u64,
    ) -> Result<CallHistoryDto, AppError> {
        let now = Utc::now();
        let page = page.max(1);
        let per_page = limit.clamp(1, MAX_HISTORY_LIMIT);

        let scope = match business_id {
            Some(business_id) => {
                let membership = BusinessMemberRepository::new(self.db)
                    .find(business_id, user_id)
                    .await?;

                match membership {
                    Some(membership) if membership.is_admin() => HistoryScope::Business(business_id),
                    _ => HistoryScope::Waiter(user_id),
                }
            }
            None => HistoryScope::Waiter(user_id),
        };

        let (calls, total) = WaiterCallRepository::new(self.db)
            .get_history(scope, filter.since(now), page - 1, per_page)
            .await?;

        let mut table_ids = calls.iter().map(|call| call.table_id).collect::<Vec<_>>();
        table_ids.sort_unstable();
        table_ids.dedup();
        let tables = TableRepository::new(self.db).get_by_ids(&table_ids).await?;

        let calls = calls
            .into_iter()
            .map(|call| {
                let table = tables.iter().find(|table| table.id == call.table_id);
                call.into_dto(table, now)
            })
            .collect();

        Ok(CallHistoryDto {
            calls,
            filter: filter.as_str().to_string(),
            pagination: PaginationDto {
                current_page: page,
                last_page: total.div_ceil(per_page).max(1),
                per_page,
                total,
            },
        })
    }
}
