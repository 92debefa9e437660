use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::PaginationDto, waiter_call::WaiterCallDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BlockIpDto {
    pub call_id: i32,
    /// `spam` (default), `abuse` or `manual`
    pub reason: Option<String>,
    /// 1 to 720, defaults to 24
    pub duration_hours: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IpBlockDto {
    pub id: i32,
    pub business_id: i32,
    pub ip_address: String,
    pub reason: String,
    pub notes: Option<String>,
    pub blocked_by: Option<i32>,
    pub blocked_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub unblocked_at: Option<DateTime<Utc>>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BlockIpResultDto {
    pub message: String,
    pub block: IpBlockDto,
    pub table_silenced: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UnblockIpDto {
    pub ip_address: String,
    pub business_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IpBlockListDto {
    pub blocks: Vec<IpBlockDto>,
    pub pagination: PaginationDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IpDebugDto {
    pub ip_address: String,
    pub business_id: i32,
    pub is_blocked_now: bool,
    pub total_blocks: u64,
    pub active_blocks: u64,
    pub blocks: Vec<IpBlockDto>,
    pub recent_calls: Vec<WaiterCallDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ForceUnblockResultDto {
    pub message: String,
    pub unblocked_count: u64,
    pub still_blocked: bool,
}
