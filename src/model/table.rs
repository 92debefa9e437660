use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::silence::SilenceInfoDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableDto {
    pub id: i32,
    pub business_id: i32,
    pub number: i32,
    pub name: String,
    pub code: String,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub notifications_enabled: bool,
    pub active_waiter_id: Option<i32>,
    pub waiter_assigned_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTableDto {
    pub number: i32,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTableDto {
    pub number: Option<i32>,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationsToggleDto {
    pub table_id: i32,
    pub notifications_enabled: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableIdsDto {
    pub table_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivateTableResultDto {
    pub message: String,
    pub table: TableDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeactivateTableResultDto {
    pub message: String,
    pub cancelled_calls: u64,
}

/// Outcome for one table of a bulk operation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkTableResultDto {
    pub table_id: i32,
    pub table_number: i32,
    /// Machine-readable outcome such as `activated` or `assigned_to_other`
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_calls: Option<u64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkActivationSummaryDto {
    pub activated: u64,
    pub already_assigned: u64,
    pub conflicts: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkActivationResultDto {
    pub results: Vec<BulkTableResultDto>,
    pub summary: BulkActivationSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkDeactivationSummaryDto {
    pub deactivated: u64,
    pub not_assigned: u64,
    pub cancelled_calls: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BulkDeactivationResultDto {
    pub results: Vec<BulkTableResultDto>,
    pub summary: BulkDeactivationSummaryDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AssignedTableDto {
    pub table: TableDto,
    pub pending_calls: u64,
    pub silence: Option<SilenceInfoDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AssignedTablesDto {
    pub tables: Vec<AssignedTableDto>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailableTablesDto {
    pub tables: Vec<TableDto>,
    pub total: u64,
}
