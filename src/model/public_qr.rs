use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PublicBusinessDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub logo: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PublicTableDto {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub code: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PublicTableInfoDto {
    pub business: PublicBusinessDto,
    pub table: PublicTableDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PendingCallStatusDto {
    pub id: i32,
    pub status: String,
    pub called_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableStatusDto {
    pub table_id: i32,
    pub has_waiter: bool,
    pub waiter_name: Option<String>,
    pub notifications_enabled: bool,
    pub is_silenced: bool,
    pub pending_call: Option<PendingCallStatusDto>,
}
