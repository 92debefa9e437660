use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::PaginationDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallWaiterDto {
    pub message: Option<String>,
    /// `low`, `normal` (default) or `high`
    pub urgency: Option<String>,
    /// Free-form details about the customer's device.
    #[schema(value_type = Option<Object>)]
    pub client_info: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WaiterInfoDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallWaiterResultDto {
    pub call_id: i32,
    pub status: String,
    pub message: String,
    pub waiter: WaiterInfoDto,
    pub called_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

/// Answer when the table is silenced; the call is accepted but not forwarded.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallSilencedDto {
    pub status: String,
    pub message: String,
    pub reason: String,
    pub remaining_minutes: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallRejectedDto {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silenced_minutes: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WaiterCallDto {
    pub id: i32,
    pub table_id: i32,
    pub table_number: Option<i32>,
    pub table_name: Option<String>,
    pub waiter_id: Option<i32>,
    pub status: String,
    pub message: String,
    pub urgency: String,
    pub ip_address: Option<String>,
    pub called_at: DateTime<Utc>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub minutes_ago: i64,
    pub response_time_seconds: Option<i64>,
    pub completion_time_seconds: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AcknowledgeCallResultDto {
    pub message: String,
    pub call: WaiterCallDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CompleteCallResultDto {
    pub message: String,
    pub call: WaiterCallDto,
    pub total_time_seconds: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PendingCallsDto {
    pub calls: Vec<WaiterCallDto>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CallHistoryDto {
    pub calls: Vec<WaiterCallDto>,
    pub filter: String,
    pub pagination: PaginationDto,
}
