use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::table::BulkTableResultDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SilenceTableDto {
    /// 1 to 120, defaults to 30
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SilenceInfoDto {
    pub id: i32,
    pub reason: String,
    pub notes: Option<String>,
    pub silenced_by: Option<i32>,
    pub call_count: Option<i32>,
    pub silenced_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Whole minutes left, `None` when the silence has no expiry
    pub remaining_minutes: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SilenceResultDto {
    pub message: String,
    pub silence: SilenceInfoDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SilencedTableDto {
    pub table_id: i32,
    pub table_number: i32,
    pub table_name: String,
    pub silence: SilenceInfoDto,
    pub silenced_by_name: Option<String>,
    pub can_unsilence: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SilencedTablesDto {
    pub tables: Vec<SilencedTableDto>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkSilenceDto {
    pub table_ids: Vec<i32>,
    pub duration_minutes: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkSilenceSummaryDto {
    /// Tables whose silence state changed
    pub changed: u64,
    /// Tables that were already in the requested state
    pub unchanged: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkSilenceResultDto {
    pub results: Vec<BulkTableResultDto>,
    pub summary: BulkSilenceSummaryDto,
}
