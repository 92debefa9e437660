//! Waiter call domain models and parameters.
//!
//! A waiter call is raised by a customer from a table and moves through
//! `pending -> acknowledged -> completed`, or is `cancelled` when the table is released.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::{
    model::waiter_call::{CallWaiterDto, WaiterCallDto},
    server::{error::AppError, model::table::Table},
};

const MAX_MESSAGE_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Pending,
    Acknowledged,
    Completed,
    Cancelled,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Acknowledged => "acknowledged",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "pending" => Ok(Self::Pending),
            "acknowledged" => Ok(Self::Acknowledged),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DbErr::Custom(format!("Unknown call status: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "normal" => Some(Self::Normal),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        Self::parse(value).ok_or_else(|| DbErr::Custom(format!("Unknown urgency: {}", value)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaiterCall {
    pub id: i32,
    pub table_id: i32,
    pub business_id: i32,
    pub waiter_id: Option<i32>,
    pub status: CallStatus,
    pub message: String,
    pub urgency: Urgency,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub called_at: DateTime<Utc>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl WaiterCall {
    pub fn from_entity(entity: entity::waiter_call::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            table_id: entity.table_id,
            business_id: entity.business_id,
            waiter_id: entity.waiter_id,
            status: CallStatus::from_db(&entity.status)?,
            message: entity.message,
            urgency: Urgency::from_db(&entity.urgency)?,
            ip_address: entity.ip_address,
            user_agent: entity.user_agent,
            called_at: entity.called_at,
            acknowledged_at: entity.acknowledged_at,
            completed_at: entity.completed_at,
        })
    }

    /// Seconds between the call and its acknowledgement.
    pub fn response_time_seconds(&self) -> Option<i64> {
        self.acknowledged_at
            .map(|at| (at - self.called_at).num_seconds())
    }

    /// Seconds between the call and its completion.
    pub fn completion_time_seconds(&self) -> Option<i64> {
        self.completed_at.map(|at| (at - self.called_at).num_seconds())
    }

    /// Converts to a DTO, attaching table details when the table was loaded.
    pub fn into_dto(self, table: Option<&Table>, now: DateTime<Utc>) -> WaiterCallDto {
        let response_time_seconds = self.response_time_seconds();
        let completion_time_seconds = self.completion_time_seconds();

        WaiterCallDto {
            id: self.id,
            table_id: self.table_id,
            table_number: table.map(|t| t.number),
            table_name: table.map(|t| t.name.clone()),
            waiter_id: self.waiter_id,
            status: self.status.as_str().to_string(),
            message: self.message,
            urgency: self.urgency.as_str().to_string(),
            ip_address: self.ip_address,
            called_at: self.called_at,
            acknowledged_at: self.acknowledged_at,
            completed_at: self.completed_at,
            minutes_ago: (now - self.called_at).num_minutes().max(0),
            response_time_seconds,
            completion_time_seconds,
        }
    }
}

/// Validated customer request to call a waiter.
#[derive(Debug, Clone)]
pub struct CallWaiterParam {
    pub message: Option<String>,
    pub urgency: Urgency,
    pub client_info: Option<serde_json::Value>,
}

impl CallWaiterParam {
    /// Validates the public call payload.
    ///
    /// # Returns
    /// - `Ok(CallWaiterParam)` - Urgency defaults to `normal`
    /// - `Err(AppError::Validation)` - Message over 500 characters or unknown urgency
    pub fn from_dto(dto: CallWaiterDto) -> Result<Self, AppError> {
        let message = dto
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());
        if let Some(message) = &message {
            if message.chars().count() > MAX_MESSAGE_LENGTH {
                return Err(AppError::Validation(
                    "The message may not be greater than 500 characters.".to_string(),
                ));
            }
        }

        let urgency = match dto.urgency.as_deref() {
            None => Urgency::default(),
            Some(value) => Urgency::parse(value).ok_or_else(|| {
                AppError::Validation("The selected urgency is invalid.".to_string())
            })?,
        };

        Ok(Self {
            message,
            urgency,
            client_info: dto.client_info,
        })
    }
}

/// Parameters for inserting a call row.
#[derive(Debug, Clone)]
pub struct CreateCallParam {
    pub table_id: i32,
    pub business_id: i32,
    pub waiter_id: i32,
    pub message: String,
    pub urgency: Urgency,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub client_info: Option<String>,
    pub called_at: DateTime<Utc>,
}

/// Which calls a history query covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryScope {
    /// Every call of a business, for its admins.
    Business(i32),
    /// Calls routed to one waiter.
    Waiter(i32),
}

/// Time window applied to call history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    /// Calls since midnight UTC.
    #[default]
    Today,
    /// Calls in the last hour.
    Hour,
    /// No time restriction.
    Historic,
}

impl HistoryFilter {
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None | Some("today") => Ok(Self::Today),
            Some("hour") => Ok(Self::Hour),
            Some("historic") => Ok(Self::Historic),
            Some(_) => Err(AppError::Validation(
                "The selected filter is invalid. Use today, hour or historic.".to_string(),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Hour => "hour",
            Self::Historic => "historic",
        }
    }

    /// Earliest `called_at` included by the filter.
    pub fn since(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Today => now
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .map(|midnight| midnight.and_utc()),
            Self::Hour => Some(now - Duration::hours(1)),
            Self::Historic => None,
        }
    }
}
