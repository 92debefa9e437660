use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    business::BusinessDto, silence::SilenceInfoDto, table::TableDto, waiter_call::WaiterCallDto,
};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableStatsDto {
    pub total: u64,
    pub assigned_to_me: u64,
    pub available: u64,
    pub occupied_by_others: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WaiterBusinessDto {
    pub business: BusinessDto,
    pub role: String,
    pub is_active: bool,
    pub table_stats: TableStatsDto,
    pub pending_calls: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct WaiterBusinessesDto {
    pub businesses: Vec<WaiterBusinessDto>,
    pub active_business_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BusinessTableDto {
    pub table: TableDto,
    /// `assigned_to_me`, `available` or `occupied`
    pub status: String,
    pub waiter_name: Option<String>,
    pub pending_calls: u64,
    pub latest_call: Option<WaiterCallDto>,
    pub silence: Option<SilenceInfoDto>,
    pub actions_available: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BusinessTableStatisticsDto {
    pub total: u64,
    pub assigned_to_me: u64,
    pub available: u64,
    pub occupied_by_others: u64,
    pub silenced: u64,
    pub pending_calls: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BusinessTablesDto {
    pub business: BusinessDto,
    pub tables: Vec<BusinessTableDto>,
    pub statistics: BusinessTableStatisticsDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LeaveBusinessResultDto {
    pub message: String,
    pub new_active_business_id: Option<i32>,
    pub cancelled_calls: u64,
    pub released_tables: u64,
}
