use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::waiter_call::PendingCallsDto,
    server::{
        data::{
            ip_block::IpBlockRepository, table::TableRepository,
            table_silence::TableSilenceRepository, user::UserRepository,
            waiter_call::WaiterCallRepository,
        },
        error::{call::CallError, AppError},
        model::{
            ip_block::normalize_ip,
            notification::{kind, CreateNotificationParam},
            silence::{CreateSilenceParam, SilenceReason, AUTO_SILENCE_MINUTES},
            table::Table,
            user::User,
            waiter_call::{CallStatus, CallWaiterParam, CreateCallParam, WaiterCall},
        },
        service::{notification::NotificationService, push::PushSender},
    },
};

/// Window in which calls from one table are counted for spam detection.
const SPAM_WINDOW_MINUTES: i64 = 10;
/// Calls within the spam window after which the next call silences the table.
const SPAM_CALL_LIMIT: u64 = 3;
/// A pending call younger than this blocks a new one from the same table.
const DUPLICATE_WINDOW_SECONDS: i64 = 30;

/// Where a customer call came from.
#[derive(Debug, Clone, Default)]
pub struct CallOrigin {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// How a customer call was handled when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// The call was stored and the waiter notified.
    Created { call: WaiterCall, waiter: User },
    /// The caller's IP is blocked. Nothing was stored; the caller gets a fake success.
    Blocked {
        fake_call_id: i32,
        waiter_id: i32,
        waiter_name: String,
        called_at: DateTime<Utc>,
    },
    /// The table is silenced. Nothing was stored.
    Silenced {
        reason: SilenceReason,
        remaining_minutes: Option<i64>,
    },
}

/// Service for customer calls and the waiter's handling of them.
pub struct WaiterCallService<'a> {
    db: &'a DatabaseConnection,
    push: &'a dyn PushSender,
}

impl<'a> WaiterCallService<'a> {
    pub fn new(db: &'a DatabaseConnection, push: &'a dyn PushSender) -> Self {
        Self { db, push }
    }

    /// Handles a customer calling a waiter from a table.
    ///
    /// Checks run in order: blocked IP, disabled notifications, missing waiter, active
    /// silence, spam limit and duplicate pending call. Only a call passing all of them is
    /// stored and pushed to the waiter.
    ///
    /// # Arguments
    /// - `table_id` - Table the customer scanned
    /// - `param` - Validated call payload
    /// - `origin` - Client IP and user agent
    ///
    /// # Returns
    /// - `Ok(CallOutcome)` - Created, silently blocked or silenced
    /// - `Err(AppError::NotFound)` - No such table
    /// - `Err(AppError::BadRequest)` - Notifications are disabled for the table
    /// - `Err(CallError::NoWaiterAssigned)` - Nobody holds the table
    /// - `Err(CallError::TooManyCalls)` - Spam limit hit, the table is now auto-silenced
    /// - `Err(AppError::Conflict)` - A call from this table is already pending
    pub async fn call_waiter(
        &self,
        table_id: i32,
        param: CallWaiterParam,
        origin: CallOrigin,
    ) -> Result<CallOutcome, AppError> {
        let now = Utc::now();
        let user_repo = UserRepository::new(self.db);

        let table = TableRepository::new(self.db)
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        let waiter = match table.active_waiter_id {
            Some(waiter_id) => user_repo.find_by_id(waiter_id).await?,
            None => None,
        };

        let ip_address = origin.ip_address.as_deref().and_then(normalize_ip);

        if let Some(ip) = &ip_address {
            if IpBlockRepository::new(self.db)
                .is_blocked(table.business_id, ip, now)
                .await?
            {
                tracing::info!("Ignoring call from blocked IP {} at table {}", ip, table.id);

                return Ok(CallOutcome::Blocked {
                    fake_call_id: rand::random_range(100_000..1_000_000),
                    waiter_id: waiter.as_ref().map(|w| w.id).unwrap_or(0),
                    waiter_name: waiter
                        .map(|w| w.name)
                        .unwrap_or_else(|| "Waiter".to_string()),
                    called_at: now,
                });
            }
        }

        if !table.notifications_enabled {
            return Err(AppError::BadRequest(
                "Notifications are disabled for this table".to_string(),
            ));
        }

        let Some(waiter) = waiter else {
            return Err(CallError::NoWaiterAssigned(table.id).into());
        };

        let silence_repo = TableSilenceRepository::new(self.db);
        if let Some(silence) = silence_repo.find_active_for_table(table.id, now).await? {
            return Ok(CallOutcome::Silenced {
                remaining_minutes: silence.remaining_minutes(now),
                reason: silence.reason,
            });
        }

        // Spam count, duplicate check and insert run in one transaction.
        let txn = self.db.begin().await?;
        let call_repo = WaiterCallRepository::new(&txn);

        let recent = call_repo
            .count_recent_for_table(table.id, now - Duration::minutes(SPAM_WINDOW_MINUTES))
            .await?;
        if recent >= SPAM_CALL_LIMIT {
            let call_count = recent as i32 + 1;

            TableSilenceRepository::new(&txn)
                .create(CreateSilenceParam {
                    table_id: table.id,
                    silenced_by: None,
                    reason: SilenceReason::Automatic,
                    notes: Some(format!(
                        "Automatically silenced after {} calls in {} minutes",
                        call_count, SPAM_WINDOW_MINUTES
                    )),
                    call_count: Some(call_count),
                    silenced_at: now,
                    expires_at: Some(now + Duration::minutes(AUTO_SILENCE_MINUTES)),
                })
                .await?;
            txn.commit().await?;

            tracing::warn!(
                "Table {} auto-silenced after {} calls in {} minutes",
                table.id,
                call_count,
                SPAM_WINDOW_MINUTES
            );

            return Err(CallError::TooManyCalls {
                table_id: table.id,
                call_count,
                silenced_minutes: AUTO_SILENCE_MINUTES,
            }
            .into());
        }

        if call_repo
            .find_pending_for_table(table.id, Some(now - Duration::seconds(DUPLICATE_WINDOW_SECONDS)))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A call is already pending for this table".to_string(),
            ));
        }

        let call = call_repo
            .create(CreateCallParam {
                table_id: table.id,
                business_id: table.business_id,
                waiter_id: waiter.id,
                message: param
                    .message
                    .unwrap_or_else(|| format!("Call from table {}", table.number)),
                urgency: param.urgency,
                ip_address,
                user_agent: origin.user_agent,
                client_info: param.client_info.map(|info| info.to_string()),
                called_at: now,
            })
            .await?;
        txn.commit().await?;

        self.notify_waiter(&table, &call, &waiter).await?;

        Ok(CallOutcome::Created { call, waiter })
    }

    /// Marks a pending call as seen by its waiter.
    ///
    /// # Returns
    /// - `Ok((WaiterCall, Option<Table>))` - The updated call and its table
    /// - `Err(AppError::NotFound)` - No such call
    /// - `Err(AppError::Forbidden)` - The call belongs to another waiter
    /// - `Err(AppError::Conflict)` - The call is no longer pending
    pub async fn acknowledge(
        &self,
        user_id: i32,
        call_id: i32,
    ) -> Result<(WaiterCall, Option<Table>), AppError> {
        let call = self.find_own_call(user_id, call_id).await?;

        if call.status != CallStatus::Pending {
            return Err(AppError::Conflict("Call is not pending".to_string()));
        }

        let call = WaiterCallRepository::new(self.db)
            .acknowledge(call.id, Utc::now())
            .await?;
        let table = TableRepository::new(self.db).find_by_id(call.table_id).await?;

        Ok((call, table))
    }

    /// Closes a call. A call completed straight from pending is acknowledged at the same time.
    ///
    /// # Returns
    /// - `Ok((WaiterCall, Option<Table>))` - The completed call and its table
    /// - `Err(AppError::Conflict)` - The call was already completed or cancelled
    pub async fn complete(
        &self,
        user_id: i32,
        call_id: i32,
    ) -> Result<(WaiterCall, Option<Table>), AppError> {
        let call = self.find_own_call(user_id, call_id).await?;

        if !matches!(call.status, CallStatus::Pending | CallStatus::Acknowledged) {
            return Err(AppError::Conflict("Call has already been closed".to_string()));
        }

        let call = WaiterCallRepository::new(self.db)
            .complete(call.id, Utc::now())
            .await?;
        let table = TableRepository::new(self.db).find_by_id(call.table_id).await?;

        Ok((call, table))
    }

    /// Gets the waiter's pending calls, oldest first.
    pub async fn get_pending(&self, user_id: i32) -> Result<PendingCallsDto, AppError> {
        let now = Utc::now();

        let calls = WaiterCallRepository::new(self.db)
            .get_pending_for_waiter(user_id)
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
            .collect::<Vec<_>>();

        Ok(PendingCallsDto {
            total: calls.len() as u64,
            calls,
        })
    }

    async fn find_own_call(&self, user_id: i32, call_id: i32) -> Result<WaiterCall, AppError> {
        let call = WaiterCallRepository::new(self.db)
            .find_by_id(call_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call not found".to_string()))?;

        if call.waiter_id != Some(user_id) {
            return Err(AppError::Forbidden(
                "This call is not assigned to you".to_string(),
            ));
        }

        Ok(call)
    }

    async fn notify_waiter(&self, table: &Table, call: &WaiterCall, waiter: &User) -> Result<(), AppError> {
        let data = json!({
            "type": kind::WAITER_CALL,
            "call_id": call.id.to_string(),
            "table_id": table.id.to_string(),
            "table_number": table.number.to_string(),
            "urgency": call.urgency.as_str(),
        });

        NotificationService::new(self.db, self.push)
            .notify(CreateNotificationParam {
                user_id: waiter.id,
                kind: kind::WAITER_CALL.to_string(),
                title: format!("{} is calling", table.name),
                body: call.message.clone(),
                data: Some(data),
            })
            .await?;

        Ok(())
    }
}
